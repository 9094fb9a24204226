// ============================================================================
// Class Identity
// Identifies the data type an annotation is attached to
// ============================================================================

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of an annotated type.
///
/// Compared and hashed by `TypeId`; the name is carried for logging only.
#[derive(Clone, Copy)]
pub struct ClassId {
    type_id: TypeId,
    name: &'static str,
}

impl ClassId {
    /// Identity of the type `T` itself.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Identity of the concrete type of `value`.
    ///
    /// Resolved at runtime, so a `&dyn Any` yields the erased type. The name
    /// stays the static one.
    #[inline]
    pub fn of_val<T: ?Sized + Any>(value: &T) -> Self {
        Self {
            type_id: Any::type_id(value),
            name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified type name
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ClassId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ClassId {}

impl Hash for ClassId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.name)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Money;
    struct Measurement;

    #[test]
    fn test_type_and_instance_agree() {
        let money = Money;
        assert_eq!(ClassId::of::<Money>(), ClassId::of_val(&money));
        assert_ne!(ClassId::of::<Money>(), ClassId::of::<Measurement>());
    }

    #[test]
    fn test_erased_instance_resolves_concrete_type() {
        let boxed: Box<dyn Any> = Box::new(Money);
        assert_eq!(ClassId::of_val(&*boxed), ClassId::of::<Money>());
        assert_ne!(ClassId::of_val(&*boxed), ClassId::of::<dyn Any>());
    }

    #[test]
    fn test_display_uses_type_name() {
        assert!(ClassId::of::<Money>().to_string().ends_with("Money"));
        assert!(format!("{:?}", ClassId::of::<Money>()).starts_with("ClassId("));
    }
}
