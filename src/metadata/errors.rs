// ============================================================================
// Metadata Errors
// Error types for metadata store administration
// ============================================================================

use crate::domain::ClassId;
use std::fmt;

/// Errors raised while configuring a store or declaring type inheritance.
///
/// Lookups never fail: a missing annotation resolves to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataError {
    /// A type was declared as its own parent
    SelfInheritance { class: ClassId },
    /// The parent already descends from the child
    InheritanceCycle { child: ClassId, parent: ClassId },
    /// Store configuration rejected by validation
    InvalidConfig(&'static str),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::SelfInheritance { class } => {
                write!(f, "type {} cannot inherit from itself", class)
            },
            MetadataError::InheritanceCycle { child, parent } => write!(
                f,
                "inheritance cycle: {} already descends from {}",
                parent, child
            ),
            MetadataError::InvalidConfig(reason) => {
                write!(f, "invalid store configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for MetadataError {}

/// Result type alias for metadata store operations
pub type MetadataResult<T> = Result<T, MetadataError>;
