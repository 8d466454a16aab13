// SPDX-License-Identifier: MPL-2.0
//! Banner policy newtypes.
//!
//! These wrappers keep policy values within valid ranges so the manager
//! never has to re-check them.

// =============================================================================
// Capacity Bounds
// =============================================================================

/// Bounds for the number of banners displayed at once.
pub mod capacity_bounds {
    /// Minimum number of simultaneously active banners.
    pub const MIN: usize = 1;
    /// Maximum number of simultaneously active banners.
    pub const MAX: usize = 4;
    /// Default: a single active banner, everything else queued FIFO.
    pub const DEFAULT: usize = 1;
}

// =============================================================================
// DisplayCapacity
// =============================================================================

/// Number of display slots the manager may fill at once.
///
/// A capacity of one is the single-banner policy. Larger values let that many
/// banners be active concurrently; promotion from the queue stays FIFO either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayCapacity(usize);

impl DisplayCapacity {
    /// Single-banner policy.
    pub const SINGLE: Self = Self(1);

    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(slots: usize) -> Self {
        Self(slots.clamp(capacity_bounds::MIN, capacity_bounds::MAX))
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true for the single-banner policy.
    #[must_use]
    pub fn is_single(self) -> bool {
        self.0 == 1
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= capacity_bounds::MAX
    }
}

impl Default for DisplayCapacity {
    fn default() -> Self {
        Self(capacity_bounds::DEFAULT)
    }
}
