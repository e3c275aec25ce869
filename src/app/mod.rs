// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections and
//! the overlays (gallery, mobile navigation).
//!
//! The `App` struct wires together the content catalog, localization,
//! settings and diagnostics, and translates component events into side
//! effects like image fetches, focus restoration or the diagnostics export
//! on exit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::InputScope;

use crate::content::Catalog;
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, WarningKind};
use crate::domain::carousel::Carousel;
use crate::domain::focus::FocusRing;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageLoader};
use crate::ui::focus::{self, PageTarget};
use crate::ui::theming::ThemeMode;
use crate::ui::navbar::HeaderLayout;
use crate::ui::{gallery, mobile_nav, navbar};
use fluent_bundle::FluentValue;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Arc<Catalog>,
    theme_mode: ThemeMode,
    navbar: navbar::State,
    gallery: gallery::State,
    mobile_nav: mobile_nav::State,
    header_layout: HeaderLayout,
    carousel: Carousel,
    /// Keyboard focus on the page behind any overlay.
    page_focus: FocusRing<PageTarget>,
    images: ImageCache,
    /// `None` if the HTTP client could not be built; every load then fails.
    loader: Option<ImageLoader>,
    prefetch_neighbors: bool,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    /// i18n key of the warning shown in the banner.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_open", &self.gallery.is_open())
            .field("menu_open", &self.navbar.is_menu_open())
            .field("mobile_nav_open", &self.mobile_nav.is_open())
            .field("header_layout", &self.header_layout)
            .field("page_focus", &self.page_focus.focused())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are routed through `update` so the diagnostics report can
/// be written before the process exits.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; the flags are only consumed once.
    let fallback = Flags::new(Arc::clone(&flags.catalog));
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| fallback.clone());
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts fetching the card covers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let catalog = flags.catalog;

        let loader = match ImageLoader::new() {
            Ok(loader) => Some(loader),
            Err(err) => {
                eprintln!("Failed to initialize image loader: {err}");
                None
            }
        };

        let mut diagnostics = DiagnosticsCollector::new(config.diagnostics.buffer_capacity());
        diagnostics.log_state(AppStateEvent::Startup {
            locale: i18n.current_locale().to_string(),
            project_count: catalog.projects().len(),
        });

        let mut warning = None;
        if let Some(err) = flags.content_fallback {
            diagnostics.log_warning(WarningKind::ContentFallback, err.to_string());
            warning = Some(err.i18n_key().to_string());
        }
        // A broken settings file matters more to the user than a fallback catalog.
        if let Some(key) = config_warning {
            diagnostics.log_warning(WarningKind::ConfigLoad, key.clone());
            warning = Some(key);
        }

        // Corrected by the first window event if the window opens narrower.
        let header_layout = HeaderLayout::for_width(WINDOW_DEFAULT_WIDTH as f32);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            navbar: navbar::State::default(),
            gallery: gallery::State::new(
                config.gallery.swipe_threshold(),
                config.gallery.initial_focus_delay(),
            ),
            mobile_nav: mobile_nav::State::default(),
            header_layout,
            carousel: Carousel::new(
                catalog.testimonials().len(),
                config.carousel.auto_advance_interval(),
                config.carousel.reduced_motion(),
                Instant::now(),
            ),
            page_focus: focus::page_ring(&catalog, header_layout),
            images: ImageCache::default(),
            loader,
            prefetch_neighbors: config.gallery.prefetch_enabled(),
            diagnostics,
            diagnostics_out: flags.diagnostics_out,
            warning,
            catalog,
        };

        let task = update::request_covers(&mut app.update_context());

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            catalog: &self.catalog,
            navbar: &mut self.navbar,
            gallery: &mut self.gallery,
            mobile_nav: &mut self.mobile_nav,
            header_layout: &mut self.header_layout,
            carousel: &mut self.carousel,
            page_focus: &mut self.page_focus,
            images: &mut self.images,
            loader: self.loader.as_ref(),
            prefetch_neighbors: self.prefetch_neighbors,
            diagnostics: &mut self.diagnostics,
            diagnostics_out: self.diagnostics_out.as_ref(),
            warning: &mut self.warning,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.viewer().active_item() {
            Some(item) => {
                let dialog = self.i18n.tr_with_args(
                    "gallery-dialog-label",
                    &[("title", FluentValue::from(item.title()))],
                );
                format!("{dialog} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    /// Which surface owns the keyboard right now.
    #[must_use]
    pub fn input_scope(&self) -> InputScope {
        if self.gallery.is_open() {
            InputScope::Gallery
        } else if self.mobile_nav.is_open() {
            InputScope::MobileNav
        } else if self.navbar.is_menu_open() {
            InputScope::ServicesMenu
        } else {
            InputScope::Page
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.input_scope());
        let carousel_sub = subscription::create_carousel_subscription(&self.carousel);

        Subscription::batch([event_sub, carousel_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Fetch tasks report failures through handles; fold them in first.
        self.diagnostics.process_pending();
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(&mut ctx, navbar_message),
            Message::Works(works_message) => update::handle_works_message(&mut ctx, works_message),
            Message::Testimonials(carousel_message) => {
                update::handle_testimonials_message(&mut ctx, carousel_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::PageKey(key) => update::handle_page_key(&mut ctx, key),
            Message::ImageLoaded(image_ref, result) => {
                update::handle_image_loaded(&mut ctx, image_ref, result)
            }
            Message::CarouselTick(now) => update::handle_carousel_tick(&mut ctx, now),
            Message::MobileNav(mobile_nav_message) => {
                update::handle_mobile_nav_message(&mut ctx, mobile_nav_message)
            }
            Message::DismissWarning => update::handle_dismiss_warning(&mut ctx),
            Message::WindowResized(width) => update::handle_window_resized(&mut ctx, width),
            Message::WindowCloseRequested(window_id) => {
                update::handle_window_close(&mut ctx, window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            navbar: &self.navbar,
            header_layout: self.header_layout,
            gallery: &self.gallery,
            mobile_nav: &self.mobile_nav,
            carousel: &self.carousel,
            images: &self.images,
            page_focus: self.page_focus.focused(),
            warning: self.warning.as_deref(),
        })
    }
}
