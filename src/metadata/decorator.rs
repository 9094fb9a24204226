// ============================================================================
// Property Decorators
// Reusable values that attach one annotation to a property when applied
// ============================================================================

use super::store::MetadataStore;
use crate::domain::ClassId;
use crate::interfaces::AnnotationKind;
use std::fmt;

/// An annotation waiting to be attached to a property.
///
/// The same decorator can be applied to any number of properties; each
/// application overwrites whatever that property carried under the kind.
pub struct Decorator<K: AnnotationKind> {
    value: K::Value,
}

/// Build a decorator that attaches `value` under kind `K`.
pub fn decorate<K: AnnotationKind>(value: K::Value) -> Decorator<K> {
    Decorator { value }
}

impl<K: AnnotationKind> Decorator<K> {
    /// Value written by each application
    pub fn value(&self) -> &K::Value {
        &self.value
    }

    /// Attach to `property` of `T` in the global store.
    pub fn apply<T: ?Sized + 'static>(&self, property: &str) -> &Self {
        self.apply_to(MetadataStore::global(), ClassId::of::<T>(), property)
    }

    /// Attach to `property` of `class` in `store`.
    pub fn apply_to(&self, store: &MetadataStore, class: ClassId, property: &str) -> &Self {
        store.decorate::<K>(class, property, self.value.clone());
        self
    }
}

// Manual impls: derives would put the bounds on `K` instead of `K::Value`.
impl<K: AnnotationKind> Clone for Decorator<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<K: AnnotationKind> fmt::Debug for Decorator<K>
where
    K::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decorator")
            .field("kind", &K::NAME)
            .field("value", &self.value)
            .finish()
    }
}
