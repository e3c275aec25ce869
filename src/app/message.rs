// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Catalog;
use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::ui::focus::KeyInput;
use crate::ui::{gallery, mobile_nav, navbar, testimonials, works};
use iced::widget::image;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Works(works::Message),
    Testimonials(testimonials::Message),
    Gallery(gallery::Message),
    MobileNav(mobile_nav::Message),
    /// A key pressed while no overlay is open.
    PageKey(KeyInput),
    /// Result of an async image fetch.
    ImageLoaded(ImageRef, Result<image::Handle, Error>),
    /// Periodic tick driving the testimonial auto-advance.
    CarouselTick(Instant),
    DismissWarning,
    /// New window width in logical pixels.
    WindowResized(f32),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Validated site content shared by every page.
    pub catalog: Arc<Catalog>,
    /// Set when `--content` could not be used and the embedded catalog
    /// was loaded instead.
    pub content_fallback: Option<Error>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}

impl Flags {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            lang: None,
            catalog,
            content_fallback: None,
            diagnostics_out: None,
        }
    }
}
