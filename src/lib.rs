// SPDX-License-Identifier: MPL-2.0
//! `portfolio_lens` presents a project portfolio built with the Iced GUI
//! framework.
//!
//! Projects are shown as a grid of cards; each opens an accessible modal
//! gallery with keyboard, thumbnail and touch-swipe navigation. The crate
//! also carries the page shell around it (navigation with a services
//! dropdown, a testimonial carousel), Fluent localization, user settings
//! and an in-memory diagnostics log.

#![doc(html_root_url = "https://docs.rs/portfolio_lens/0.1.0")]

pub mod app;
pub mod content;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
