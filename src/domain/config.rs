// ============================================================================
// Metadata Store Configuration
// Controls how annotations are resolved across type hierarchies
// ============================================================================

use crate::metadata::{MetadataError, MetadataResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of ancestors walked when resolving an annotation.
pub const DEFAULT_MAX_DEPTH: usize = 32;

// ============================================================================
// Inheritance Mode
// ============================================================================

/// Whether lookups consult the annotations of registered parent types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InheritanceMode {
    /// Walk parent links; the nearest annotation wins
    #[default]
    Inherit,

    /// Only annotations attached to the type itself are visible
    Own,
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Configuration for a [`MetadataStore`](crate::metadata::MetadataStore)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoreConfig {
    /// Inheritance resolution rule
    pub inheritance: InheritanceMode,

    /// Maximum number of ancestors consulted by a lookup
    pub max_depth: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            inheritance: InheritanceMode::Inherit,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl StoreConfig {
    pub fn new(inheritance: InheritanceMode) -> Self {
        Self {
            inheritance,
            ..Self::default()
        }
    }

    /// Builder method: Set inheritance mode
    pub fn with_inheritance(mut self, inheritance: InheritanceMode) -> Self {
        self.inheritance = inheritance;
        self
    }

    /// Builder method: Set maximum ancestor depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Store whose types never see their parents' annotations
    pub fn isolated() -> Self {
        Self::new(InheritanceMode::Own)
    }

    /// Validate the configuration
    pub fn validate(&self) -> MetadataResult<()> {
        if self.max_depth == 0 {
            return Err(MetadataError::InvalidConfig(
                "max_depth must be at least 1",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.inheritance, InheritanceMode::Inherit);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = StoreConfig::default()
            .with_inheritance(InheritanceMode::Own)
            .with_max_depth(4);

        assert_eq!(config.inheritance, InheritanceMode::Own);
        assert_eq!(config.max_depth, 4);
        assert_eq!(StoreConfig::isolated().inheritance, InheritanceMode::Own);
    }

    #[test]
    fn test_validation() {
        let config = StoreConfig::default().with_max_depth(0);
        assert!(matches!(
            config.validate(),
            Err(MetadataError::InvalidConfig(_))
        ));
    }
}
