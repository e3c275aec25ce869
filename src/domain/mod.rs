// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core presentation logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and state machines.
//! It has no dependencies on external crates (except `std`) so every rule
//! about gallery navigation, focus containment, and gestures can be tested
//! without a window.
//!
//! # Modules
//!
//! - [`carousel`]: Auto-advancing slide rotation ([`Carousel`](carousel::Carousel))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`focus`]: Focus ring and focus trap ([`FocusRing`](focus::FocusRing),
//!   [`FocusTrap`](focus::FocusTrap))
//! - [`gallery`]: Gallery items and the viewer state machine
//!   ([`GalleryItem`](gallery::GalleryItem), [`GalleryViewer`](gallery::GalleryViewer))
//! - [`gesture`]: Horizontal swipe detection ([`SwipeTracker`](gesture::SwipeTracker))
//! - [`navigation`]: Wrap-around index arithmetic shared by the above
//! - [`ui`]: UI value objects ([`SwipeThreshold`](ui::newtypes::SwipeThreshold),
//!   [`FocusDelay`](ui::newtypes::FocusDelay),
//!   [`AutoAdvanceInterval`](ui::newtypes::AutoAdvanceInterval))

pub mod carousel;
pub mod diagnostics;
pub mod focus;
pub mod gallery;
pub mod gesture;
pub mod navigation;
pub mod ui;
