// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the navbar, an optional warning banner and a scrollable body
//! (works grid, testimonials). The mobile navigation and the gallery are
//! stacked on top while open.

use super::Message;
use crate::content::Catalog;
use crate::domain::carousel::Carousel;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::focus::PageTarget;
use crate::ui::navbar::HeaderLayout;
use crate::ui::{gallery, mobile_nav, navbar, styles, testimonials, works};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub navbar: &'a navbar::State,
    pub header_layout: HeaderLayout,
    pub gallery: &'a gallery::State,
    pub mobile_nav: &'a mobile_nav::State,
    pub carousel: &'a Carousel,
    pub images: &'a ImageCache,
    pub page_focus: Option<PageTarget>,
    /// i18n key of the warning banner, if any.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        state: ctx.navbar,
        layout: ctx.header_layout,
        focused: ctx.page_focus,
    })
    .map(Message::Navbar);

    let works_view = works::view(works::ViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        images: ctx.images,
        focused: ctx.page_focus,
    })
    .map(Message::Works);

    let testimonials_view = testimonials::view(testimonials::ViewContext {
        i18n: ctx.i18n,
        testimonials: ctx.catalog.testimonials(),
        carousel: ctx.carousel,
        focused: ctx.page_focus,
    })
    .map(Message::Testimonials);

    let body = Scrollable::new(
        Column::new()
            .spacing(spacing::XXL)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(works_view)
            .push(testimonials_view),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layout = Column::new().push(navbar_view);
    if let Some(key) = ctx.warning {
        layout = layout.push(warning_banner(ctx.i18n, key));
    }
    layout = layout.push(body);

    let page = Container::new(layout.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(page);
    if let Some(overlay) = mobile_nav::view(
        ctx.mobile_nav,
        mobile_nav::ViewContext {
            i18n: ctx.i18n,
            catalog: ctx.catalog,
        },
    ) {
        layers = layers.push(overlay.map(Message::MobileNav));
    }
    if let Some(overlay) = gallery::view(
        ctx.gallery,
        gallery::ViewContext {
            i18n: ctx.i18n,
            images: ctx.images,
        },
    ) {
        layers = layers.push(overlay.map(Message::Gallery));
    }
    layers.into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &'a str) -> Element<'a, Message> {
    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
        .on_press(Message::DismissWarning)
        .style(styles::button::link(false));

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr(key)).size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(dismiss),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::warning_banner)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::{AutoAdvanceInterval, FocusDelay, SwipeThreshold};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn page_renders_with_warning_and_both_overlays() {
        let i18n = I18n::default();
        let catalog = Catalog::load_embedded().expect("embedded catalog is valid");
        let images = ImageCache::default();
        let navbar_state = navbar::State::default();
        let mut mobile_nav_state = mobile_nav::State::default();
        mobile_nav_state.open(&catalog, Some(PageTarget::MenuButton));
        let mut gallery_state = gallery::State::new(SwipeThreshold::default(), FocusDelay::default());
        gallery_state.open(Arc::clone(&catalog.projects()[0]), Some(PageTarget::Card(0)));
        let carousel = Carousel::new(
            catalog.testimonials().len(),
            AutoAdvanceInterval::default(),
            false,
            Instant::now(),
        );

        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            navbar: &navbar_state,
            header_layout: HeaderLayout::Compact,
            gallery: &gallery_state,
            mobile_nav: &mobile_nav_state,
            carousel: &carousel,
            images: &images,
            page_focus: Some(PageTarget::Card(0)),
            warning: Some("notification-config-load-error"),
        });
    }
}
