// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Swipe threshold and deferred focus delay
//! - **Carousel**: Testimonial auto-advance interval
//! - **Diagnostics**: Event buffer capacity
//! - **Media**: Image cache size and network timeouts

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Horizontal travel (logical pixels) beyond which a touch counts as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Delay before the opened gallery focuses its container (milliseconds).
pub const DEFAULT_INITIAL_FOCUS_DELAY_MS: u64 = 100;

pub const MAX_INITIAL_FOCUS_DELAY_MS: u64 = 1000;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Seconds a testimonial stays visible before auto-advancing.
pub const DEFAULT_AUTO_ADVANCE_SECS: u32 = 5;

pub const MIN_AUTO_ADVANCE_SECS: u32 = 2;

pub const MAX_AUTO_ADVANCE_SECS: u32 = 60;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Decoded image handles kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 32;

/// Upper bound for a single remote image request.
pub const IMAGE_REQUEST_TIMEOUT_SECS: u64 = 30;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(DEFAULT_INITIAL_FOCUS_DELAY_MS <= MAX_INITIAL_FOCUS_DELAY_MS);

    assert!(MIN_AUTO_ADVANCE_SECS > 0);
    assert!(DEFAULT_AUTO_ADVANCE_SECS >= MIN_AUTO_ADVANCE_SECS);
    assert!(DEFAULT_AUTO_ADVANCE_SECS <= MAX_AUTO_ADVANCE_SECS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);

    assert!(DEFAULT_IMAGE_CACHE_CAPACITY > 0);
    assert!(IMAGE_REQUEST_TIMEOUT_SECS > 0);
};
