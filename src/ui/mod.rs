// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one exposes a `ViewContext`, a `Message` enum and, where it owns state,
//! an `update` that reports an event to the application.
//!
//! # Sections
//!
//! - [`navbar`] - Header links and the services dropdown
//! - [`mobile_nav`] - Navigation overlay for compact windows
//! - [`works`] - Project cards that open the gallery
//! - [`gallery`] - Modal image viewer with focus trap and swipe support
//! - [`testimonials`] - Auto-advancing testimonial carousel
//!
//! # Shared Infrastructure
//!
//! - [`focus`] - Page focus targets and keyboard input mapping
//! - [`widgets`] - Custom Iced widgets (touch swipe area)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod focus;
pub mod gallery;
pub mod mobile_nav;
pub mod navbar;
pub mod styles;
pub mod testimonials;
pub mod theming;
pub mod widgets;
pub mod works;
