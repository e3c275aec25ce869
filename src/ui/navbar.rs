// SPDX-License-Identifier: MPL-2.0
//! Header navigation with the services dropdown.
//!
//! While the dropdown is open it owns a [`FocusTrap`] that releases at its
//! edges: ArrowUp/ArrowDown cycle through the services, Tab past either end
//! closes the menu and lets focus continue along the page, and Escape closes
//! it and puts focus back on the toggle.
//!
//! Narrow windows get a [`HeaderLayout::Compact`] header: a single menu
//! button that asks the app to open the mobile navigation overlay.

use crate::content::Catalog;
use crate::domain::focus::{EdgeBehavior, FocusTrap, TabOutcome};
use crate::domain::navigation::Direction;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::{KeyInput, PageTarget};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// How the header presents the navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderLayout {
    /// Links, including the services toggle, laid out inline.
    #[default]
    Full,
    /// A menu button standing in for every link.
    Compact,
}

impl HeaderLayout {
    /// Layout for a window `width` logical pixels wide.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        if width < sizing::COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Full
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub state: &'a State,
    pub layout: HeaderLayout,
    /// Page-level focus, used when the dropdown is closed.
    pub focused: Option<PageTarget>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LinkPressed(usize),
    ToggleServices,
    ServicePressed(usize),
    MenuButtonPressed,
    Key(KeyInput),
    ClickedOutside,
}

/// Where page focus goes once the dropdown closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusAfterClose {
    /// Back to the captured control (the toggle).
    Restore(PageTarget),
    /// Tab left the menu: move on from `from` in `direction`.
    Continue {
        from: PageTarget,
        direction: Direction,
    },
    /// Leave focus where the pointer put it.
    Released,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    MenuOpened,
    MenuClosed(FocusAfterClose),
    /// A link was chosen. `menu_closed` is set when the services menu
    /// closed on the way.
    LinkActivated {
        href: String,
        menu_closed: Option<FocusAfterClose>,
    },
    MobileNavRequested,
}

#[derive(Debug, Default)]
pub struct State {
    dropdown: Option<FocusTrap<usize, PageTarget>>,
}

impl State {
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.dropdown.is_some()
    }

    /// Index of the focused service while the menu is open.
    #[must_use]
    pub fn focused_service(&self) -> Option<usize> {
        self.dropdown.as_ref().and_then(FocusTrap::focused)
    }

    /// Closes the menu without touching focus, e.g. when another overlay opens.
    pub fn dismiss(&mut self) -> Event {
        self.close(|_| FocusAfterClose::Released)
    }

    fn open(&mut self, service_count: usize) -> Event {
        let mut trap = FocusTrap::engage(
            Some(PageTarget::ServicesToggle),
            (0..service_count).collect(),
            EdgeBehavior::Release,
        );
        // Focus lands on the first service, as with a native menu.
        let _ = trap.cycle(Direction::Next);
        self.dropdown = Some(trap);
        Event::MenuOpened
    }

    fn close(&mut self, focus: impl FnOnce(Option<PageTarget>) -> FocusAfterClose) -> Event {
        self.close_menu(focus).map_or(Event::None, Event::MenuClosed)
    }

    fn close_menu(
        &mut self,
        focus: impl FnOnce(Option<PageTarget>) -> FocusAfterClose,
    ) -> Option<FocusAfterClose> {
        self.dropdown.take().map(|trap| focus(trap.release()))
    }
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message, catalog: &Catalog) -> Event {
    match message {
        Message::LinkPressed(index) => match catalog.nav_links().get(index) {
            Some(link) => Event::LinkActivated {
                href: link.href.clone(),
                menu_closed: state.close_menu(|_| FocusAfterClose::Released),
            },
            None => Event::None,
        },
        Message::ToggleServices => {
            if state.is_menu_open() {
                state.close(restore_or_release)
            } else {
                state.open(catalog.services().len())
            }
        }
        Message::ServicePressed(index) => {
            activate_service(state, index, catalog, |_| FocusAfterClose::Released)
        }
        Message::MenuButtonPressed => Event::MobileNavRequested,
        Message::ClickedOutside => state.dismiss(),
        Message::Key(key) => handle_key(state, key, catalog),
    }
}

fn handle_key(state: &mut State, key: KeyInput, catalog: &Catalog) -> Event {
    let Some(trap) = state.dropdown.as_mut() else {
        return Event::None;
    };

    match key {
        KeyInput::ArrowDown => {
            let _ = trap.cycle(Direction::Next);
            Event::None
        }
        KeyInput::ArrowUp => {
            let _ = trap.cycle(Direction::Previous);
            Event::None
        }
        KeyInput::Tab { shift } => match trap.handle_tab(shift) {
            TabOutcome::Released => {
                let direction = if shift {
                    Direction::Previous
                } else {
                    Direction::Next
                };
                state.close(|restore| match restore {
                    Some(from) => FocusAfterClose::Continue { from, direction },
                    None => FocusAfterClose::Released,
                })
            }
            TabOutcome::Moved(_) | TabOutcome::Unchanged => Event::None,
        },
        KeyInput::Escape => state.close(restore_or_release),
        KeyInput::Activate => match trap.focused() {
            Some(index) => activate_service(state, index, catalog, restore_or_release),
            None => Event::None,
        },
        KeyInput::ArrowLeft | KeyInput::ArrowRight => Event::None,
    }
}

fn restore_or_release(restore: Option<PageTarget>) -> FocusAfterClose {
    restore.map_or(FocusAfterClose::Released, FocusAfterClose::Restore)
}

fn activate_service(
    state: &mut State,
    index: usize,
    catalog: &Catalog,
    focus: impl FnOnce(Option<PageTarget>) -> FocusAfterClose,
) -> Event {
    let Some(service) = catalog.services().get(index) else {
        return Event::None;
    };
    Event::LinkActivated {
        href: service.href.clone(),
        menu_closed: state.close_menu(focus),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.layout == HeaderLayout::Compact {
        let menu_button = button(Text::new("☰").size(typography::TITLE_MD))
            .on_press(Message::MenuButtonPressed)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::link(
                ctx.focused == Some(PageTarget::MenuButton),
            ));
        return Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(menu_button)
                .push(Text::new(ctx.i18n.tr("nav-open-menu")).size(typography::BODY)),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .into();
    }

    let links = ctx.catalog.nav_links().iter().enumerate().fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, (index, link)| {
            let item = if link.has_services {
                let indicator = if ctx.state.is_menu_open() { "▴" } else { "▾" };
                button(Text::new(format!("{} {indicator}", link.name)).size(typography::BODY))
                    .on_press(Message::ToggleServices)
                    .style(styles::button::link(
                        ctx.focused == Some(PageTarget::ServicesToggle),
                    ))
            } else {
                button(Text::new(link.name.as_str()).size(typography::BODY))
                    .on_press(Message::LinkPressed(index))
                    .style(styles::button::link(
                        ctx.focused == Some(PageTarget::NavLink(index)),
                    ))
            };
            row.push(item.padding([spacing::XS, spacing::SM]))
        },
    );

    let mut content = Column::new().width(Length::Fill).push(
        Container::new(links)
            .padding(spacing::SM)
            .width(Length::Fill),
    );

    if ctx.state.is_menu_open() {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let focused = ctx.state.focused_service();
    let items = ctx.catalog.services().iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |column, (index, service)| {
            column.push(
                button(Text::new(service.name.as_str()).size(typography::BODY))
                    .on_press(Message::ServicePressed(index))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::link(focused == Some(index))),
            )
        },
    );

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("nav-services-menu")).size(typography::CAPTION))
            .push(items),
    )
    .padding(spacing::XS)
    .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
    .style(styles::container::dropdown)
    .into()
}
