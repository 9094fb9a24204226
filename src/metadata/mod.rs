// ============================================================================
// Metadata Module
// Class/property annotation storage
// ============================================================================
//
// This module provides:
// - MetadataStore: (type, property, kind) -> value table with inheritance
// - Decorator: reusable annotation applied to properties
// - MetadataError: errors raised by store administration
//
// Design principles:
// - Lookups never fail; a missing annotation resolves to a default
// - One namespace per AnnotationKind
// - Explicit registration, no runtime reflection

mod decorator;
mod errors;
mod store;

pub use decorator::{decorate, Decorator};
pub use errors::{MetadataError, MetadataResult};
pub use store::MetadataStore;
