// SPDX-License-Identifier: MPL-2.0
//! Works page: a grid of project cards that open the gallery.

use crate::content::Catalog;
use crate::domain::gallery::GalleryItem;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::PageTarget;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, image, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the works grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub images: &'a ImageCache,
    pub focused: Option<PageTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CardPressed(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let cards = ctx
        .catalog
        .projects()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |grid, (index, project)| {
            grid.push(card(&ctx, index, project))
        })
        .wrap()
        .vertical_spacing(spacing::LG);

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(ctx.i18n.tr("works-heading")).size(typography::TITLE_LG))
        .push(cards)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, index: usize, project: &'a GalleryItem) -> Element<'a, Message> {
    let focused = ctx.focused == Some(PageTarget::Card(index));

    let cover: Element<'a, Message> = match ctx.images.status(project.cover()) {
        ImageStatus::Ready(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .into(),
        status => {
            let key = if matches!(status, ImageStatus::Failed) {
                "gallery-image-unavailable"
            } else {
                "gallery-image-loading"
            };
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .style(styles::container::image_placeholder)
                .into()
        }
    };

    let view_project = button(Text::new(ctx.i18n.tr("works-view-project")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::CardPressed(index))
        .style(styles::button::primary(focused));

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(Text::new(project.title()).size(typography::TITLE_SM))
        .push(Text::new(project.meta()).size(typography::CAPTION))
        .push(Text::new(project.location()).size(typography::CAPTION))
        .push(view_project);

    let label = ctx.i18n.tr_with_args(
        "works-card-label",
        &[("title", FluentValue::from(project.title()))],
    );

    let card = Container::new(Column::new().push(cover).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .clip(true)
        .style(styles::container::card(focused));

    tooltip(
        mouse_area(card).on_press(Message::CardPressed(index)),
        Text::new(label),
        tooltip::Position::Bottom,
    )
    .into()
}
