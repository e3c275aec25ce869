// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened through their `Event`/`Effect` values;
//! the handlers here turn those into focus changes, image requests,
//! diagnostics entries and tasks.

use super::Message;
use crate::content::Catalog;
use crate::diagnostics::{
    AppStateEvent, CloseReason, DiagnosticsCollector, UserAction, WarningKind,
};
use crate::domain::carousel::Carousel;
use crate::domain::focus::FocusRing;
use crate::domain::gallery::ImageRef;
use crate::domain::navigation::Direction;
use crate::domain::ui::FocusDelay;
use crate::error::Error;
use crate::media::{load_image, ImageCache, ImageLoader};
use crate::ui::focus::{self, KeyInput, PageTarget};
use crate::ui::gallery::{self, Effect as GalleryEffect};
use crate::ui::mobile_nav::{self, Event as MobileNavEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, FocusAfterClose, HeaderLayout};
use crate::ui::testimonials;
use crate::ui::works;
use iced::widget::image;
use iced::{window, Task};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Arc<Catalog>,
    pub navbar: &'a mut navbar::State,
    pub gallery: &'a mut gallery::State,
    pub mobile_nav: &'a mut mobile_nav::State,
    pub header_layout: &'a mut HeaderLayout,
    pub carousel: &'a mut Carousel,
    pub page_focus: &'a mut FocusRing<PageTarget>,
    pub images: &'a mut ImageCache,
    pub loader: Option<&'a ImageLoader>,
    pub prefetch_neighbors: bool,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub diagnostics_out: Option<&'a PathBuf>,
    pub warning: &'a mut Option<String>,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    let event = navbar::update(ctx.navbar, message, ctx.catalog);
    apply_navbar_event(ctx, event)
}

fn apply_navbar_event(ctx: &mut UpdateContext<'_>, event: NavbarEvent) -> Task<Message> {
    match event {
        NavbarEvent::None => Task::none(),
        NavbarEvent::MenuOpened => {
            ctx.page_focus.focus(PageTarget::ServicesToggle);
            ctx.diagnostics
                .log_action(UserAction::ToggleServicesMenu { open: true });
            Task::none()
        }
        NavbarEvent::MenuClosed(focus) => {
            apply_menu_closed(ctx, focus);
            Task::none()
        }
        NavbarEvent::LinkActivated { href, menu_closed } => {
            if let Some(focus) = menu_closed {
                apply_menu_closed(ctx, focus);
            }
            ctx.diagnostics.log_action(UserAction::ActivateLink { href });
            Task::none()
        }
        NavbarEvent::MobileNavRequested => open_mobile_nav(ctx),
    }
}

fn apply_menu_closed(ctx: &mut UpdateContext<'_>, focus: FocusAfterClose) {
    match focus {
        FocusAfterClose::Restore(target) => {
            ctx.page_focus.focus(target);
        }
        FocusAfterClose::Continue { from, direction } => {
            ctx.page_focus.focus(from);
            ctx.page_focus.advance(direction);
        }
        FocusAfterClose::Released => ctx.page_focus.clear(),
    }
    ctx.diagnostics
        .log_action(UserAction::ToggleServicesMenu { open: false });
}

/// Closes the services menu because something else on the page took the
/// pointer or keyboard.
fn dismiss_services_menu(ctx: &mut UpdateContext<'_>) {
    let dismissed = ctx.navbar.dismiss();
    let _ = apply_navbar_event(ctx, dismissed);
}

/// Opens the mobile navigation and schedules focus of its first link.
fn open_mobile_nav(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    dismiss_services_menu(ctx);
    ctx.page_focus.focus(PageTarget::MenuButton);
    if !ctx.mobile_nav.open(ctx.catalog, Some(PageTarget::MenuButton)) {
        return Task::none();
    }
    ctx.diagnostics
        .log_action(UserAction::ToggleMobileNav { open: true });
    deferred(
        ctx.gallery.focus_delay(),
        Message::MobileNav(mobile_nav::Message::FocusFirst),
    )
}

pub fn handle_mobile_nav_message(
    ctx: &mut UpdateContext<'_>,
    message: mobile_nav::Message,
) -> Task<Message> {
    let event = mobile_nav::update(ctx.mobile_nav, message, ctx.catalog);
    apply_mobile_nav_event(ctx, event);
    Task::none()
}

fn apply_mobile_nav_event(ctx: &mut UpdateContext<'_>, event: MobileNavEvent) {
    let restore_focus = match event {
        MobileNavEvent::None => return,
        MobileNavEvent::Closed { restore_focus } => restore_focus,
        MobileNavEvent::LinkActivated {
            href,
            restore_focus,
        } => {
            ctx.diagnostics.log_action(UserAction::ActivateLink { href });
            restore_focus
        }
    };
    // The menu button is gone if the window widened while open.
    let restored = restore_focus.is_some_and(|target| ctx.page_focus.focus(target));
    if !restored {
        ctx.page_focus.clear();
    }
    ctx.diagnostics
        .log_action(UserAction::ToggleMobileNav { open: false });
}

/// Switches the header between full and compact as the window crosses the
/// breakpoint. Overlays that only exist in the other layout close.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, width: f32) -> Task<Message> {
    let layout = HeaderLayout::for_width(width);
    if layout == *ctx.header_layout {
        return Task::none();
    }
    *ctx.header_layout = layout;
    ctx.page_focus
        .set_targets(focus::page_targets(ctx.catalog, layout));

    match layout {
        HeaderLayout::Compact => dismiss_services_menu(ctx),
        HeaderLayout::Full => {
            let closed = ctx.mobile_nav.close();
            apply_mobile_nav_event(ctx, closed);
        }
    }
    Task::none()
}

pub fn handle_works_message(ctx: &mut UpdateContext<'_>, message: works::Message) -> Task<Message> {
    match message {
        works::Message::CardPressed(index) => open_project(ctx, index),
    }
}

/// Opens the gallery for project `index` and schedules the deferred focus.
pub fn open_project(ctx: &mut UpdateContext<'_>, index: usize) -> Task<Message> {
    let Some(project) = ctx.catalog.project(index).cloned() else {
        return Task::none();
    };

    dismiss_services_menu(ctx);

    let restore_to = PageTarget::Card(index);
    ctx.page_focus.focus(restore_to);

    if !ctx.gallery.open(Arc::clone(&project), Some(restore_to)) {
        return Task::none();
    }

    ctx.diagnostics.log_action(UserAction::OpenGallery {
        project: project.title().to_string(),
        image_count: project.image_count(),
    });

    let focus_container = deferred(
        ctx.gallery.focus_delay(),
        Message::Gallery(gallery::Message::FocusContainer),
    );
    Task::batch([request_gallery_images(ctx), focus_container])
}

/// Delivers a deferred focus `message` once the open transition has settled.
///
/// Not cancelled on close: a closed overlay ignores the message.
fn deferred(delay: FocusDelay, message: Message) -> Task<Message> {
    if delay.is_immediate() {
        return Task::done(message);
    }
    let duration = delay.as_duration();
    // The timer is built inside the future so it binds to the executor's
    // reactor, not the caller's thread.
    Task::perform(
        async move { tokio::time::sleep(duration).await },
        move |()| message,
    )
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let effect = ctx.gallery.update(message);
    apply_gallery_effect(ctx, effect)
}

fn apply_gallery_effect(ctx: &mut UpdateContext<'_>, effect: GalleryEffect) -> Task<Message> {
    match effect {
        GalleryEffect::None => Task::none(),
        GalleryEffect::Navigated { direction, source } => {
            let action = match direction {
                Direction::Next => UserAction::NavigateNext { source },
                Direction::Previous => UserAction::NavigatePrevious { source },
            };
            ctx.diagnostics.log_action(action);
            request_gallery_images(ctx)
        }
        GalleryEffect::Jumped(index) => {
            ctx.diagnostics.log_action(UserAction::JumpToImage { index });
            request_gallery_images(ctx)
        }
        GalleryEffect::Closed {
            reason,
            restore_focus,
        } => {
            match restore_focus {
                Some(target) => {
                    ctx.page_focus.focus(target);
                }
                None => ctx.page_focus.clear(),
            }
            ctx.diagnostics
                .log_action(UserAction::CloseGallery { reason });
            // Gallery images may have pushed covers out of the cache.
            request_covers(ctx)
        }
    }
}

pub fn handle_testimonials_message(
    ctx: &mut UpdateContext<'_>,
    message: testimonials::Message,
) -> Task<Message> {
    dismiss_services_menu(ctx);
    if testimonials::update(ctx.carousel, message, Instant::now()) {
        let action = match message {
            testimonials::Message::Previous => UserAction::CarouselPrevious,
            testimonials::Message::Next => UserAction::CarouselNext,
            testimonials::Message::GoTo(index) => UserAction::CarouselGoTo { index },
        };
        ctx.diagnostics.log_action(action);
    }
    Task::none()
}

/// Handles a key pressed while no overlay is open.
pub fn handle_page_key(ctx: &mut UpdateContext<'_>, key: KeyInput) -> Task<Message> {
    // Overlay listeners normally own these keys; a press racing the
    // subscription swap still goes to the right place.
    if ctx.gallery.is_open() {
        return handle_gallery_message(ctx, gallery::Message::Key(key));
    }
    if ctx.mobile_nav.is_open() {
        return handle_mobile_nav_message(ctx, mobile_nav::Message::Key(key));
    }
    if ctx.navbar.is_menu_open() {
        return handle_navbar_message(ctx, navbar::Message::Key(key));
    }

    match key {
        KeyInput::Tab { shift } => {
            let direction = if shift {
                Direction::Previous
            } else {
                Direction::Next
            };
            ctx.page_focus.advance(direction);
            Task::none()
        }
        KeyInput::Escape => {
            ctx.page_focus.clear();
            Task::none()
        }
        KeyInput::Activate => match ctx.page_focus.focused() {
            Some(target) => activate_page_target(ctx, target),
            None => Task::none(),
        },
        KeyInput::ArrowLeft | KeyInput::ArrowRight => {
            let on_carousel = matches!(
                ctx.page_focus.focused(),
                Some(
                    PageTarget::TestimonialPrevious
                        | PageTarget::TestimonialDot(_)
                        | PageTarget::TestimonialNext
                )
            );
            if !on_carousel {
                return Task::none();
            }
            let message = if key == KeyInput::ArrowLeft {
                testimonials::Message::Previous
            } else {
                testimonials::Message::Next
            };
            handle_testimonials_message(ctx, message)
        }
        KeyInput::ArrowUp | KeyInput::ArrowDown => Task::none(),
    }
}

fn activate_page_target(ctx: &mut UpdateContext<'_>, target: PageTarget) -> Task<Message> {
    match target {
        PageTarget::NavLink(index) => {
            handle_navbar_message(ctx, navbar::Message::LinkPressed(index))
        }
        PageTarget::ServicesToggle => handle_navbar_message(ctx, navbar::Message::ToggleServices),
        PageTarget::MenuButton => open_mobile_nav(ctx),
        PageTarget::Card(index) => open_project(ctx, index),
        PageTarget::TestimonialPrevious => {
            handle_testimonials_message(ctx, testimonials::Message::Previous)
        }
        PageTarget::TestimonialDot(index) => {
            handle_testimonials_message(ctx, testimonials::Message::GoTo(index))
        }
        PageTarget::TestimonialNext => {
            handle_testimonials_message(ctx, testimonials::Message::Next)
        }
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    image_ref: ImageRef,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.images.insert(image_ref, handle),
        // The fetch task already reported the failure to diagnostics.
        Err(_) => ctx.images.mark_failed(image_ref),
    }
    Task::none()
}

pub fn handle_carousel_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.carousel.tick(now);
    Task::none()
}

pub fn handle_dismiss_warning(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    dismiss_services_menu(ctx);
    *ctx.warning = None;
    Task::none()
}

/// Closes any open gallery, writes the diagnostics report if requested,
/// then exits.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, _window_id: window::Id) -> Task<Message> {
    let effect = ctx.gallery.close(CloseReason::Host);
    let _ = apply_gallery_effect(ctx, effect);

    ctx.diagnostics.log_state(AppStateEvent::Shutdown {
        image_cache: ctx.images.stats(),
    });
    ctx.diagnostics.process_pending();

    if let Some(path) = ctx.diagnostics_out {
        if let Err(err) = ctx.diagnostics.export_to_file(path) {
            eprintln!("Failed to write diagnostics report to {}: {err}", path.display());
        }
    }

    iced::exit()
}

/// Requests every card cover that is not cached or in flight.
pub fn request_covers(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let covers: Vec<ImageRef> = ctx
        .catalog
        .projects()
        .iter()
        .map(|project| project.cover().clone())
        .collect();
    request_images(ctx, &covers)
}

/// Requests the current gallery image and, when enabled, its neighbours.
fn request_gallery_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let viewer = ctx.gallery.viewer();
    let mut wanted: Vec<ImageRef> = viewer.current_image().cloned().into_iter().collect();
    if ctx.prefetch_neighbors {
        wanted.extend(viewer.neighbors().into_iter().cloned());
    }
    request_images(ctx, &wanted)
}

/// Starts a fetch for every image in `wanted` that is not cached, in
/// flight or known to fail.
pub fn request_images(ctx: &mut UpdateContext<'_>, wanted: &[ImageRef]) -> Task<Message> {
    let claimed = ctx.images.claim_requests(wanted);
    if claimed.is_empty() {
        return Task::none();
    }

    let Some(loader) = ctx.loader else {
        for image_ref in claimed {
            ctx.images.mark_failed(image_ref);
        }
        return Task::none();
    };

    Task::batch(claimed.into_iter().map(|image_ref| {
        let loader = loader.clone();
        let diagnostics = ctx.diagnostics.handle();
        Task::perform(
            async move {
                let (image_ref, result) = load_image(loader, image_ref).await;
                if let Err(err) = &result {
                    diagnostics.log_warning(WarningKind::ImageLoad, format!("{image_ref}: {err}"));
                }
                (image_ref, result)
            },
            |(image_ref, result)| Message::ImageLoaded(image_ref, result),
        )
    }))
}
