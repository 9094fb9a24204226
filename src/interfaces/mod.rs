// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod annotation_kind;

pub use annotation_kind::{AnnotationKind, AnnotationToken};
