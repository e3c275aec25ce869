// SPDX-License-Identifier: MPL-2.0
//! Keyboard focus management for overlays and menus.
//!
//! - [`FocusRing`]: ordered targets with a wrapping cursor
//! - [`FocusTrap`]: a ring plus the host focus to restore when the overlay
//!   closes, with configurable behavior at the edges

mod ring;
mod trap;

pub use ring::FocusRing;
pub use trap::{EdgeBehavior, FocusTrap, TabOutcome};
