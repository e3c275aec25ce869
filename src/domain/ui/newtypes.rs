// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Clamped wrappers for the tunable gallery and carousel values, so a
//! hand-edited settings file can never produce an unusable threshold.

use std::time::Duration;

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Horizontal swipe threshold bounds in logical pixels.
pub mod swipe_bounds {
    pub const MIN_PX: f32 = 10.0;
    pub const MAX_PX: f32 = 400.0;
    pub const DEFAULT_PX: f32 = 50.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal travel, in logical pixels, for a touch to count as a
/// swipe. Always within 10–400 px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= swipe_bounds::MIN_PX
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= swipe_bounds::MAX_PX
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Focus Delay Bounds
// =============================================================================

/// Deferred modal focus delay bounds in milliseconds.
pub mod focus_delay_bounds {
    pub const MIN_MS: u64 = 0;
    pub const MAX_MS: u64 = 1000;
    pub const DEFAULT_MS: u64 = 100;
}

// =============================================================================
// FocusDelay
// =============================================================================

/// Delay between opening the gallery and focusing its container.
///
/// Gives the overlay one layout pass before focus lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusDelay(u64);

impl FocusDelay {
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(focus_delay_bounds::MIN_MS, focus_delay_bounds::MAX_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// True when focus should be applied without waiting.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for FocusDelay {
    fn default() -> Self {
        Self(focus_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Auto-Advance Bounds
// =============================================================================

/// Carousel auto-advance interval bounds in seconds.
pub mod auto_advance_bounds {
    pub const MIN_SECS: u32 = 2;
    pub const MAX_SECS: u32 = 60;
    pub const DEFAULT_SECS: u32 = 5;
}

// =============================================================================
// AutoAdvanceInterval
// =============================================================================

/// Time a testimonial stays on screen before the carousel rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceInterval(u32);

impl AutoAdvanceInterval {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(auto_advance_bounds::MIN_SECS, auto_advance_bounds::MAX_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= auto_advance_bounds::MIN_SECS
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= auto_advance_bounds::MAX_SECS
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(auto_advance_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Tests
// =============================================================================
