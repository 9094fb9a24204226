// ============================================================================
// Domain Models Module
// Value objects shared by the metadata store and the annotations
// ============================================================================

pub mod class;
pub mod config;
pub mod precision;

pub use class::ClassId;
pub use config::{InheritanceMode, StoreConfig, DEFAULT_MAX_DEPTH};
pub use precision::{PrecisionSpec, WHOLE};
