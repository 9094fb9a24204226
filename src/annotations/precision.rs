// ============================================================================
// Precision Annotation
// Attach and read the decimal range of numeric properties
// ============================================================================

use crate::domain::{ClassId, PrecisionSpec, WHOLE};
use crate::interfaces::AnnotationKind;
use crate::metadata::{decorate, Decorator, MetadataStore};
use std::any::Any;

/// The "precision" annotation kind.
#[derive(Debug, Clone, Copy)]
pub struct PrecisionKind;

impl AnnotationKind for PrecisionKind {
    const NAME: &'static str = "precision";
    type Value = PrecisionSpec;
}

/// Decorator recording `{minimum, maximum}` decimals on a property.
///
/// Without a `maximum` the property takes exactly `minimum` decimals.
/// Values are recorded as given; an inverted range is not rejected.
///
/// # Example
/// ```
/// use property_precision::prelude::*;
///
/// struct Money;
/// struct Measurement;
///
/// precision(2, None).apply::<Money>("amount");
/// precision(0, 3).apply::<Measurement>("value");
///
/// assert_eq!(precision_of::<Money>("amount"), PrecisionSpec::new(2, 2));
/// assert_eq!(precision_of::<Measurement>("value"), PrecisionSpec::new(0, 3));
/// ```
pub fn precision(minimum: u32, maximum: impl Into<Option<u32>>) -> Decorator<PrecisionKind> {
    let maximum = maximum.into().unwrap_or(minimum);
    decorate::<PrecisionKind>(PrecisionSpec::new(minimum, maximum))
}

/// Precision of `property` on `T`, or [`WHOLE`] when it carries none.
pub fn precision_of<T: ?Sized + 'static>(property: &str) -> PrecisionSpec {
    precision_of_in(MetadataStore::global(), ClassId::of::<T>(), property)
}

/// Precision of `property` on the concrete type of `instance`.
pub fn precision_of_val<T: ?Sized + Any>(instance: &T, property: &str) -> PrecisionSpec {
    precision_of_in(MetadataStore::global(), ClassId::of_val(instance), property)
}

/// Precision of `property` on `class`, read from an explicit store.
pub fn precision_of_in(store: &MetadataStore, class: ClassId, property: &str) -> PrecisionSpec {
    store.decorator_of::<PrecisionKind>(class, property, WHOLE)
}

/// Every precision-annotated property of `class`, sorted by name.
pub fn precisions_in(store: &MetadataStore, class: ClassId) -> Vec<(String, PrecisionSpec)> {
    store.annotated::<PrecisionKind>(class)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Money;
    struct Measurement;
    struct Plain;
    struct Ledger;

    fn store() -> MetadataStore {
        MetadataStore::default()
    }

    #[test]
    fn test_exact_precision() {
        let store = store();
        precision(2, None).apply_to(&store, ClassId::of::<Money>(), "amount");

        assert_eq!(
            precision_of_in(&store, ClassId::of::<Money>(), "amount"),
            PrecisionSpec { minimum: 2, maximum: 2 }
        );
    }

    #[test]
    fn test_range_precision() {
        let store = store();
        precision(0, 3).apply_to(&store, ClassId::of::<Measurement>(), "value");

        assert_eq!(
            precision_of_in(&store, ClassId::of::<Measurement>(), "value"),
            PrecisionSpec { minimum: 0, maximum: 3 }
        );
    }

    #[test]
    fn test_unannotated_is_whole() {
        let store = store();
        let first = precision_of_in(&store, ClassId::of::<Plain>(), "count");
        let second = precision_of_in(&store, ClassId::of::<Plain>(), "count");

        assert_eq!(first, WHOLE);
        assert_eq!(first, second);
        assert!(store.is_empty());
    }

    #[test]
    fn test_last_application_wins() {
        let store = store();
        let money = ClassId::of::<Money>();

        precision(2, None).apply_to(&store, money, "amount");
        precision(4, 6).apply_to(&store, money, "amount");

        assert_eq!(precision_of_in(&store, money, "amount"), PrecisionSpec::new(4, 6));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_precisions_listing() {
        let store = store();
        let ledger = ClassId::of::<Ledger>();

        precision(2, None)
            .apply_to(&store, ledger, "debit")
            .apply_to(&store, ledger, "credit");
        precision(0, 6).apply_to(&store, ledger, "rate");

        assert_eq!(
            precisions_in(&store, ledger),
            vec![
                ("credit".to_string(), PrecisionSpec::exact(2)),
                ("debit".to_string(), PrecisionSpec::exact(2)),
                ("rate".to_string(), PrecisionSpec::new(0, 6)),
            ]
        );
    }

    #[test]
    fn test_erased_instance_reads_stored_precision() {
        struct Cash;
        precision(3, None).apply::<Cash>("amount");

        let boxed: Box<dyn Any> = Box::new(Cash);
        assert_eq!(precision_of_val(&*boxed, "amount"), PrecisionSpec::exact(3));

        let erased: &dyn Any = &Cash;
        assert_eq!(precision_of_val(erased, "amount"), PrecisionSpec::exact(3));
    }

    #[test]
    fn test_decorator_value() {
        assert_eq!(*precision(3, None).value(), PrecisionSpec::exact(3));
        assert_eq!(*precision(1, Some(5)).value(), PrecisionSpec::new(1, 5));
    }

    proptest! {
        #[test]
        fn exact_precision_reads_back(m in any::<u32>()) {
            let store = store();
            precision(m, None).apply_to(&store, ClassId::of::<Money>(), "amount");
            prop_assert_eq!(
                precision_of_in(&store, ClassId::of::<Money>(), "amount"),
                PrecisionSpec::new(m, m)
            );
        }

        #[test]
        fn range_precision_reads_back(m in 0u32..1000, extra in 0u32..1000) {
            let store = store();
            let max = m + extra;
            precision(m, max).apply_to(&store, ClassId::of::<Measurement>(), "value");
            prop_assert_eq!(
                precision_of_in(&store, ClassId::of::<Measurement>(), "value"),
                PrecisionSpec::new(m, max)
            );
        }

        #[test]
        fn only_last_application_is_observable(specs in prop::collection::vec((0u32..20, 0u32..20), 1..10)) {
            let store = store();
            let money = ClassId::of::<Money>();
            for (min, max) in &specs {
                precision(*min, *max).apply_to(&store, money, "amount");
            }
            let (min, max) = specs[specs.len() - 1];
            prop_assert_eq!(precision_of_in(&store, money, "amount"), PrecisionSpec::new(min, max));
        }
    }
}
