// ============================================================================
// Property Precision Library
// Declarative decimal-precision metadata for numeric properties
// ============================================================================

//! # Property Precision
//!
//! Attach the allowed number of decimals to numeric properties of data types,
//! and read it back wherever values are formatted, validated or serialized.
//!
//! ## Features
//!
//! - **Reusable decorators** applied once per property at schema construction
//! - **Whole-number default**: unannotated properties read as `{0, 0}`
//! - **Typed annotation kinds** sharing one store without collisions
//! - **Explicit inheritance** between data types, configurable per store
//!
//! ## Example
//!
//! ```rust
//! use property_precision::prelude::*;
//!
//! struct Money { amount: i64 }
//! struct Plain;
//!
//! precision(2, None).apply::<Money>("amount");
//!
//! let price = Money { amount: 1999 };
//! assert_eq!(precision_of_val(&price, "amount"), PrecisionSpec::new(2, 2));
//! assert_eq!(precision_of::<Plain>("count"), WHOLE);
//! # let _ = price.amount;
//! ```

pub mod annotations;
pub mod domain;
pub mod interfaces;
pub mod metadata;

// Re-exports for convenience
pub mod prelude {
    pub use crate::annotations::{
        precision, precision_of, precision_of_in, precision_of_val, precisions_in, PrecisionKind,
    };
    pub use crate::domain::{ClassId, InheritanceMode, PrecisionSpec, StoreConfig, WHOLE};
    pub use crate::interfaces::{AnnotationKind, AnnotationToken};
    pub use crate::metadata::{decorate, Decorator, MetadataError, MetadataResult, MetadataStore};
}
