// ============================================================================
// Annotation Kind Interface
// Strongly-typed key for one category of property metadata
// ============================================================================

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A category of property metadata (precision, length, format, ...).
///
/// Each implementing type is its own namespace in the store: two kinds never
/// see each other's entries, even when their `NAME`s are equal.
pub trait AnnotationKind: 'static {
    /// Human readable name, used in logs
    const NAME: &'static str;

    /// Value attached to a property
    type Value: Clone + Send + Sync + 'static;

    /// Runtime key for this kind
    fn token() -> AnnotationToken {
        AnnotationToken {
            type_id: TypeId::of::<Self>(),
            name: Self::NAME,
        }
    }
}

/// Runtime form of an [`AnnotationKind`], keyed by the kind's `TypeId`.
#[derive(Clone, Copy)]
pub struct AnnotationToken {
    type_id: TypeId,
    name: &'static str,
}

impl AnnotationToken {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for AnnotationToken {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for AnnotationToken {}

impl Hash for AnnotationToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for AnnotationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnnotationToken({})", self.name)
    }
}

impl fmt::Display for AnnotationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Length;
    impl AnnotationKind for Length {
        const NAME: &'static str = "length";
        type Value = usize;
    }

    struct OtherLength;
    impl AnnotationKind for OtherLength {
        const NAME: &'static str = "length";
        type Value = usize;
    }

    #[test]
    fn test_same_name_distinct_tokens() {
        assert_eq!(Length::token(), Length::token());
        assert_ne!(Length::token(), OtherLength::token());
        assert_eq!(Length::token().name(), OtherLength::token().name());
    }
}
