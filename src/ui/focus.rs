// SPDX-License-Identifier: MPL-2.0
//! Page-level keyboard focus.
//!
//! Iced buttons are not keyboard focusable, so the app keeps its own notion
//! of which control has focus and styles it with a visible ring. Overlays
//! (gallery, services dropdown, mobile navigation) capture a [`PageTarget`] when they open and
//! hand it back when they close.

use crate::content::Catalog;
use crate::domain::focus::FocusRing;
use crate::ui::navbar::HeaderLayout;
use iced::keyboard::{self, key::Named, Key, Modifiers};

/// A focusable control on the page behind any overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageTarget {
    NavLink(usize),
    ServicesToggle,
    /// Opens the mobile navigation; replaces the header links when compact.
    MenuButton,
    Card(usize),
    TestimonialPrevious,
    TestimonialDot(usize),
    TestimonialNext,
}

/// Keys the page and its overlays react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Tab { shift: bool },
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Enter or Space.
    Activate,
}

impl KeyInput {
    /// Maps a key press, ignoring everything not listed in [`KeyInput`].
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        match key {
            Key::Named(Named::Tab) => Some(Self::Tab {
                shift: modifiers.shift(),
            }),
            Key::Named(Named::Escape) => Some(Self::Escape),
            Key::Named(Named::ArrowLeft) => Some(Self::ArrowLeft),
            Key::Named(Named::ArrowRight) => Some(Self::ArrowRight),
            Key::Named(Named::ArrowUp) => Some(Self::ArrowUp),
            Key::Named(Named::ArrowDown) => Some(Self::ArrowDown),
            Key::Named(Named::Enter | Named::Space) => Some(Self::Activate),
            _ => None,
        }
    }

    /// Maps a keyboard event; only key presses count.
    #[must_use]
    pub fn from_event(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => Self::from_key(key, *modifiers),
            _ => None,
        }
    }
}

/// Focus order of the page: navigation, cards, then carousel controls.
///
/// A compact header contributes only the menu button.
#[must_use]
pub fn page_targets(catalog: &Catalog, layout: HeaderLayout) -> Vec<PageTarget> {
    let mut targets: Vec<PageTarget> = match layout {
        HeaderLayout::Full => catalog
            .nav_links()
            .iter()
            .enumerate()
            .map(|(index, link)| {
                if link.has_services {
                    PageTarget::ServicesToggle
                } else {
                    PageTarget::NavLink(index)
                }
            })
            .collect(),
        HeaderLayout::Compact => vec![PageTarget::MenuButton],
    };

    targets.extend((0..catalog.projects().len()).map(PageTarget::Card));

    let slides = catalog.testimonials().len();
    if slides > 1 {
        targets.push(PageTarget::TestimonialPrevious);
        targets.extend((0..slides).map(PageTarget::TestimonialDot));
        targets.push(PageTarget::TestimonialNext);
    }

    targets
}

/// Builds the page focus ring for `catalog`. Nothing is focused initially.
#[must_use]
pub fn page_ring(catalog: &Catalog, layout: HeaderLayout) -> FocusRing<PageTarget> {
    FocusRing::new(page_targets(catalog, layout))
}
