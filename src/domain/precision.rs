// ============================================================================
// Precision Value Object
// Allowed range of decimals for a numeric property
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Range of decimals a numeric property accepts or renders.
///
/// `minimum <= maximum` is expected but never enforced: the value is recorded
/// exactly as the caller declared it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionSpec {
    /// Smallest number of decimals
    pub minimum: u32,
    /// Largest number of decimals
    pub maximum: u32,
}

/// Precision of a whole number: no fractional part.
pub const WHOLE: PrecisionSpec = PrecisionSpec::WHOLE;

impl PrecisionSpec {
    /// `{ minimum: 0, maximum: 0 }`
    pub const WHOLE: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(minimum: u32, maximum: u32) -> Self {
        Self { minimum, maximum }
    }

    /// Exactly `decimals` decimals.
    #[inline]
    pub const fn exact(decimals: u32) -> Self {
        Self::new(decimals, decimals)
    }

    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.minimum == 0 && self.maximum == 0
    }

    /// True when the range collapses to a single decimal count.
    #[inline]
    pub const fn is_exact(&self) -> bool {
        self.minimum == self.maximum
    }
}

impl Default for PrecisionSpec {
    fn default() -> Self {
        Self::WHOLE
    }
}

impl fmt::Display for PrecisionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write!(f, "{}", self.minimum)
        } else {
            write!(f, "{}..{}", self.minimum, self.maximum)
        }
    }
}
