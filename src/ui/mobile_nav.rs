// SPDX-License-Identifier: MPL-2.0
//! Full-window navigation overlay for compact windows.
//!
//! Opened from the menu button that replaces the header links when the
//! window is narrow. It holds a wrapping [`FocusTrap`]: Tab never leaves the
//! overlay, the first link gets focus shortly after opening, and Escape
//! closes it and hands focus back to the menu button. The services entry
//! expands an inline submenu instead of a dropdown.

use crate::content::Catalog;
use crate::domain::focus::{EdgeBehavior, FocusTrap, TabOutcome};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::{KeyInput, PageTarget};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Focusable controls inside the overlay, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobileNavTarget {
    Link(usize),
    ServicesToggle,
    Service(usize),
    Close,
}

/// Tab order for `catalog`; services appear only while expanded.
#[must_use]
pub fn targets_for(catalog: &Catalog, services_open: bool) -> Vec<MobileNavTarget> {
    let mut targets = Vec::new();
    for (index, link) in catalog.nav_links().iter().enumerate() {
        if link.has_services {
            targets.push(MobileNavTarget::ServicesToggle);
            if services_open {
                targets.extend((0..catalog.services().len()).map(MobileNavTarget::Service));
            }
        } else {
            targets.push(MobileNavTarget::Link(index));
        }
    }
    targets.push(MobileNavTarget::Close);
    targets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LinkPressed(usize),
    ToggleServices,
    ServicePressed(usize),
    ClosePressed,
    /// Press on the dimmed area beside the panel.
    BackdropPressed,
    /// Swallows presses on the panel so they do not reach the backdrop.
    PanelPressed,
    Key(KeyInput),
    /// Deferred focus of the first link after opening.
    FocusFirst,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Closed {
        restore_focus: Option<PageTarget>,
    },
    LinkActivated {
        href: String,
        restore_focus: Option<PageTarget>,
    },
}

#[derive(Debug, Default)]
pub struct State {
    trap: Option<FocusTrap<MobileNavTarget, PageTarget>>,
    services_open: bool,
}

impl State {
    /// Opens the overlay with focus on its container.
    ///
    /// Returns false if it was already open.
    pub fn open(&mut self, catalog: &Catalog, restore_to: Option<PageTarget>) -> bool {
        if self.trap.is_some() {
            return false;
        }
        self.services_open = false;
        self.trap = Some(FocusTrap::engage(
            restore_to,
            targets_for(catalog, false),
            EdgeBehavior::Wrap,
        ));
        true
    }

    /// Closes the overlay and hands back the captured focus target.
    ///
    /// Returns [`Event::None`] when already closed.
    pub fn close(&mut self) -> Event {
        match self.trap.take() {
            Some(trap) => {
                self.services_open = false;
                Event::Closed {
                    restore_focus: trap.release(),
                }
            }
            None => Event::None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.trap.is_some()
    }

    #[must_use]
    pub fn is_services_open(&self) -> bool {
        self.services_open
    }

    #[must_use]
    pub fn focused(&self) -> Option<MobileNavTarget> {
        self.trap.as_ref().and_then(FocusTrap::focused)
    }

    #[must_use]
    pub fn restore_target(&self) -> Option<PageTarget> {
        self.trap.as_ref().and_then(|trap| trap.restore_target().copied())
    }

    fn focus(&mut self, target: MobileNavTarget) {
        if let Some(trap) = self.trap.as_mut() {
            trap.focus(target);
        }
    }

    fn toggle_services(&mut self, catalog: &Catalog) {
        self.services_open = !self.services_open;
        if let Some(trap) = self.trap.as_mut() {
            trap.set_targets(targets_for(catalog, self.services_open));
            trap.focus(MobileNavTarget::ServicesToggle);
        }
    }

    /// Closes and reports `href` for navigation.
    fn activate(&mut self, href: &str) -> Event {
        match self.close() {
            Event::Closed { restore_focus } => Event::LinkActivated {
                href: href.to_string(),
                restore_focus,
            },
            other => other,
        }
    }
}

/// Process a mobile navigation message and return the corresponding event.
pub fn update(state: &mut State, message: Message, catalog: &Catalog) -> Event {
    if !state.is_open() {
        return Event::None;
    }

    match message {
        Message::LinkPressed(index) => match catalog.nav_links().get(index) {
            Some(link) => state.activate(&link.href),
            None => Event::None,
        },
        Message::ServicePressed(index) => match catalog.services().get(index) {
            Some(service) => state.activate(&service.href),
            None => Event::None,
        },
        Message::ToggleServices => {
            state.toggle_services(catalog);
            Event::None
        }
        Message::ClosePressed | Message::BackdropPressed => state.close(),
        Message::PanelPressed => Event::None,
        Message::FocusFirst => {
            if let Some(first) = targets_for(catalog, state.services_open).first() {
                state.focus(*first);
            }
            Event::None
        }
        Message::Key(key) => handle_key(state, key, catalog),
    }
}

fn handle_key(state: &mut State, key: KeyInput, catalog: &Catalog) -> Event {
    match key {
        KeyInput::Escape => state.close(),
        KeyInput::Tab { shift } => {
            if let Some(trap) = state.trap.as_mut() {
                match trap.handle_tab(shift) {
                    TabOutcome::Moved(_) | TabOutcome::Unchanged => {}
                    // Wrapping traps never release.
                    TabOutcome::Released => {}
                }
            }
            Event::None
        }
        KeyInput::Activate => match state.focused() {
            Some(MobileNavTarget::Link(index)) => {
                update(state, Message::LinkPressed(index), catalog)
            }
            Some(MobileNavTarget::ServicesToggle) => {
                update(state, Message::ToggleServices, catalog)
            }
            Some(MobileNavTarget::Service(index)) => {
                update(state, Message::ServicePressed(index), catalog)
            }
            Some(MobileNavTarget::Close) => state.close(),
            None => Event::None,
        },
        KeyInput::ArrowLeft | KeyInput::ArrowRight | KeyInput::ArrowUp | KeyInput::ArrowDown => {
            Event::None
        }
    }
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
}

/// Renders the overlay, or nothing when closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !state.is_open() {
        return None;
    }
    let focused = state.focused();

    let mut links = Column::new().spacing(spacing::XS);
    for (index, link) in ctx.catalog.nav_links().iter().enumerate() {
        if link.has_services {
            let indicator = if state.is_services_open() { "▴" } else { "▾" };
            links = links.push(entry(
                format!("{} {indicator}", link.name),
                Message::ToggleServices,
                focused == Some(MobileNavTarget::ServicesToggle),
            ));
            if state.is_services_open() {
                links = links.push(services(ctx.catalog, focused));
            }
        } else {
            links = links.push(entry(
                link.name.clone(),
                Message::LinkPressed(index),
                focused == Some(MobileNavTarget::Link(index)),
            ));
        }
    }

    let close = button(Text::new(ctx.i18n.tr("nav-close-menu")).size(typography::BODY))
        .on_press(Message::ClosePressed)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary(focused == Some(MobileNavTarget::Close)));

    let panel = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(Text::new(ctx.i18n.tr("nav-mobile-menu")).size(typography::TITLE_SM))
            .push(links)
            .push(close),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::MOBILE_NAV_WIDTH))
    .height(Length::Fill)
    .style(styles::container::mobile_nav_panel(state.focused().is_none()));

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let layout = Row::new()
        .push(mouse_area(panel).on_press(Message::PanelPressed))
        .push(Space::new().width(Length::Fill));

    Some(Stack::new().push(backdrop).push(layout).into())
}

fn entry<'a>(label: String, message: Message, focused: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_LG))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::link(focused))
        .into()
}

fn services<'a>(catalog: &'a Catalog, focused: Option<MobileNavTarget>) -> Element<'a, Message> {
    let items = catalog.services().iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |column, (index, service)| {
            column.push(
                button(Text::new(service.name.as_str()).size(typography::BODY))
                    .on_press(Message::ServicePressed(index))
                    .padding([spacing::XXS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::link(
                        focused == Some(MobileNavTarget::Service(index)),
                    )),
            )
        },
    );
    Container::new(items).padding([0.0, spacing::MD]).into()
}
