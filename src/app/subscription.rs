// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Exactly one keyboard listener is active at a time. The gallery, mobile
//! navigation and dropdown listeners exist only while their overlay is open;
//! Iced tears a listener down as soon as it is no longer returned from
//! `App::subscription`.

use super::Message;
use crate::domain::carousel::Carousel;
use crate::ui::focus::KeyInput;
use crate::ui::{gallery, mobile_nav, navbar};
use iced::{event, mouse, time, window, Event, Subscription};
use std::time::Duration;

/// Poll period of the carousel tick. The carousel itself decides whether
/// its interval has elapsed.
const CAROUSEL_POLL: Duration = Duration::from_millis(250);

/// Which surface currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputScope {
    Page,
    ServicesMenu,
    MobileNav,
    Gallery,
}

/// Creates the keyboard/pointer subscription for the active scope.
///
/// Window close requests and resizes are handled in every scope, so the
/// diagnostics report can be written before exit and the header layout
/// tracks the window width.
pub fn create_event_subscription(scope: InputScope) -> Subscription<Message> {
    match scope {
        InputScope::Gallery => event::listen_with(|event, _status, window_id| {
            if let Some(message) = window_event(&event, window_id) {
                return Some(message);
            }
            // The gallery is modal: it takes every key, captured or not.
            match &event {
                Event::Keyboard(key_event) => KeyInput::from_event(key_event)
                    .map(|key| Message::Gallery(gallery::Message::Key(key))),
                _ => None,
            }
        }),
        InputScope::MobileNav => event::listen_with(|event, _status, window_id| {
            if let Some(message) = window_event(&event, window_id) {
                return Some(message);
            }
            match &event {
                Event::Keyboard(key_event) => KeyInput::from_event(key_event)
                    .map(|key| Message::MobileNav(mobile_nav::Message::Key(key))),
                _ => None,
            }
        }),
        InputScope::ServicesMenu => event::listen_with(|event, status, window_id| {
            if let Some(message) = window_event(&event, window_id) {
                return Some(message);
            }
            match (&event, status) {
                (Event::Keyboard(key_event), _) => KeyInput::from_event(key_event)
                    .map(|key| Message::Navbar(navbar::Message::Key(key))),
                // Presses on any button are captured, so this only sees
                // empty space. Other page controls dismiss the menu in
                // their own handlers.
                (
                    Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
                    event::Status::Ignored,
                ) => Some(Message::Navbar(navbar::Message::ClickedOutside)),
                _ => None,
            }
        }),
        InputScope::Page => event::listen_with(|event, status, window_id| {
            if let Some(message) = window_event(&event, window_id) {
                return Some(message);
            }
            match (&event, status) {
                (Event::Keyboard(key_event), event::Status::Ignored) => {
                    KeyInput::from_event(key_event).map(Message::PageKey)
                }
                _ => None,
            }
        }),
    }
}

fn window_event(event: &Event, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(Message::WindowResized(size.width)),
        _ => None,
    }
}

/// Creates the carousel tick, active only while auto-advance applies.
pub fn create_carousel_subscription(carousel: &Carousel) -> Subscription<Message> {
    if carousel.is_auto_advancing() {
        time::every(CAROUSEL_POLL).map(Message::CarouselTick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::AutoAdvanceInterval;
    use std::time::Instant;

    #[test]
    fn close_request_maps_to_message() {
        let id = window::Id::unique();
        let message = window_event(&Event::Window(window::Event::CloseRequested), id);
        assert!(matches!(message, Some(Message::WindowCloseRequested(got)) if got == id));
    }

    #[test]
    fn resize_reports_width() {
        let id = window::Id::unique();
        let message = window_event(
            &Event::Window(window::Event::Resized(iced::Size::new(720.0, 500.0))),
            id,
        );
        assert!(matches!(message, Some(Message::WindowResized(width)) if width == 720.0));
    }

    #[test]
    fn other_window_events_are_ignored() {
        let id = window::Id::unique();
        assert!(window_event(&Event::Window(window::Event::Focused), id).is_none());
    }

    #[test]
    fn carousel_subscription_builds_in_both_modes() {
        let now = Instant::now();
        let running = Carousel::new(3, AutoAdvanceInterval::default(), false, now);
        let reduced = Carousel::new(3, AutoAdvanceInterval::default(), true, now);
        let _ = create_carousel_subscription(&running);
        let _ = create_carousel_subscription(&reduced);
    }
}
