// ============================================================================
// Annotations Module
// Property annotations built on the metadata store
// ============================================================================

mod precision;

pub use precision::{
    precision, precision_of, precision_of_in, precision_of_val, precisions_in, PrecisionKind,
};
