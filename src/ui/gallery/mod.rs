// SPDX-License-Identifier: MPL-2.0
//! Modal project gallery.
//!
//! Wraps the [`GalleryViewer`] state machine with focus containment, swipe
//! tracking and keyboard routing. The component follows the usual
//! State/Message/Effect split: [`State::update`] mutates local state and
//! returns an [`Effect`] the app turns into logging, prefetching and focus
//! restoration.

mod view;

pub use view::{view, ViewContext};

use crate::diagnostics::{CloseReason, InputSource};
use crate::domain::focus::{EdgeBehavior, FocusTrap, TabOutcome};
use crate::domain::gallery::{GalleryItem, GalleryViewer};
use crate::domain::gesture::SwipeTracker;
use crate::domain::navigation::Direction;
use crate::domain::ui::{FocusDelay, SwipeThreshold};
use crate::ui::focus::{KeyInput, PageTarget};
use crate::ui::widgets::Gesture;
use std::sync::Arc;

/// Focusable controls inside the gallery, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryTarget {
    Close,
    Previous,
    Next,
    Thumbnail(usize),
}

/// Tab order for `item`. Navigation controls exist only for multi-image galleries.
#[must_use]
pub fn targets_for(item: &GalleryItem) -> Vec<GalleryTarget> {
    let mut targets = vec![GalleryTarget::Close];
    if item.is_navigable() {
        targets.push(GalleryTarget::Previous);
        targets.push(GalleryTarget::Next);
        targets.extend((0..item.image_count()).map(GalleryTarget::Thumbnail));
    }
    targets
}

#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested(CloseReason),
    PreviousPressed,
    NextPressed,
    ThumbnailPressed(usize),
    /// A click that landed on the content panel; swallowed so it does not
    /// reach the backdrop.
    PanelPressed,
    Key(KeyInput),
    Swipe(Gesture),
    /// Deferred focus of the dialog container after opening.
    FocusContainer,
}

/// What the app should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigated {
        direction: Direction,
        source: InputSource,
    },
    Jumped(usize),
    Closed {
        reason: CloseReason,
        restore_focus: Option<PageTarget>,
    },
}

#[derive(Debug, Default)]
pub struct State {
    viewer: GalleryViewer,
    trap: Option<FocusTrap<GalleryTarget, PageTarget>>,
    swipe: SwipeTracker,
    swipe_threshold: SwipeThreshold,
    focus_delay: FocusDelay,
}

impl State {
    #[must_use]
    pub fn new(swipe_threshold: SwipeThreshold, focus_delay: FocusDelay) -> Self {
        Self {
            swipe_threshold,
            focus_delay,
            ..Self::default()
        }
    }

    /// Opens `item` at its first image.
    ///
    /// `restore_to` is the page control to refocus on close. When the gallery
    /// is already open the item is replaced but the focus captured by the
    /// first open is kept. Returns true if anything changed.
    pub fn open(&mut self, item: Arc<GalleryItem>, restore_to: Option<PageTarget>) -> bool {
        let targets = targets_for(&item);
        if !self.viewer.open(item) {
            return false;
        }
        self.swipe.cancel();
        match self.trap.as_mut() {
            Some(trap) => {
                trap.set_targets(targets);
                trap.focus_container();
            }
            None => {
                self.trap = Some(FocusTrap::engage(restore_to, targets, EdgeBehavior::Wrap));
            }
        }
        true
    }

    /// Closes the gallery, releasing the captured focus target.
    ///
    /// Returns [`Effect::None`] when already closed.
    pub fn close(&mut self, reason: CloseReason) -> Effect {
        if !self.viewer.close() {
            return Effect::None;
        }
        self.swipe.cancel();
        let restore_focus = self.trap.take().and_then(FocusTrap::release);
        Effect::Closed {
            reason,
            restore_focus,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        if !self.viewer.is_open() {
            return Effect::None;
        }

        match message {
            Message::CloseRequested(reason) => self.close(reason),
            Message::PreviousPressed => {
                self.focus(GalleryTarget::Previous);
                self.navigate(Direction::Previous, InputSource::Button)
            }
            Message::NextPressed => {
                self.focus(GalleryTarget::Next);
                self.navigate(Direction::Next, InputSource::Button)
            }
            Message::ThumbnailPressed(index) => {
                self.focus(GalleryTarget::Thumbnail(index));
                self.jump(index)
            }
            Message::PanelPressed => Effect::None,
            Message::Key(key) => self.handle_key(key),
            Message::Swipe(gesture) => self.handle_gesture(gesture),
            Message::FocusContainer => {
                if let Some(trap) = self.trap.as_mut() {
                    trap.focus_container();
                }
                Effect::None
            }
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Effect {
        match key {
            KeyInput::Escape => self.close(CloseReason::Escape),
            KeyInput::ArrowRight => self.navigate(Direction::Next, InputSource::Keyboard),
            KeyInput::ArrowLeft => self.navigate(Direction::Previous, InputSource::Keyboard),
            KeyInput::Tab { shift } => {
                if let Some(trap) = self.trap.as_mut() {
                    match trap.handle_tab(shift) {
                        TabOutcome::Moved(_) | TabOutcome::Unchanged => {}
                        // Wrapping traps never release.
                        TabOutcome::Released => {}
                    }
                }
                Effect::None
            }
            KeyInput::Activate => match self.focused() {
                Some(GalleryTarget::Close) => self.close(CloseReason::CloseButton),
                Some(GalleryTarget::Previous) => {
                    self.navigate(Direction::Previous, InputSource::Keyboard)
                }
                Some(GalleryTarget::Next) => self.navigate(Direction::Next, InputSource::Keyboard),
                Some(GalleryTarget::Thumbnail(index)) => self.jump(index),
                None => Effect::None,
            },
            KeyInput::ArrowUp | KeyInput::ArrowDown => Effect::None,
        }
    }

    fn handle_gesture(&mut self, gesture: Gesture) -> Effect {
        let navigable = self
            .viewer
            .active_item()
            .is_some_and(|item| item.is_navigable());

        match gesture {
            Gesture::Started(x) => {
                if navigable {
                    self.swipe.begin(x);
                }
                Effect::None
            }
            Gesture::Moved(x) => {
                self.swipe.track(x);
                Effect::None
            }
            Gesture::Ended(end_x) => match self.swipe.finish(end_x, self.swipe_threshold) {
                Some(direction) => self.navigate(direction, InputSource::Swipe),
                None => Effect::None,
            },
        }
    }

    fn navigate(&mut self, direction: Direction, source: InputSource) -> Effect {
        if self.viewer.step(direction) {
            Effect::Navigated { direction, source }
        } else {
            Effect::None
        }
    }

    fn jump(&mut self, index: usize) -> Effect {
        if self.viewer.jump_to(index) {
            Effect::Jumped(index)
        } else {
            Effect::None
        }
    }

    fn focus(&mut self, target: GalleryTarget) {
        if let Some(trap) = self.trap.as_mut() {
            trap.focus(target);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn viewer(&self) -> &GalleryViewer {
        &self.viewer
    }

    /// Control holding focus; `None` when the container itself is focused.
    #[must_use]
    pub fn focused(&self) -> Option<GalleryTarget> {
        self.trap.as_ref().and_then(FocusTrap::focused)
    }

    /// Whether the dialog container (rather than a control) holds focus.
    #[must_use]
    pub fn container_focused(&self) -> bool {
        self.trap.is_some() && self.focused().is_none()
    }

    #[must_use]
    pub fn restore_target(&self) -> Option<PageTarget> {
        self.trap.as_ref().and_then(|trap| trap.restore_target().copied())
    }

    #[must_use]
    pub fn focus_delay(&self) -> FocusDelay {
        self.focus_delay
    }
}
