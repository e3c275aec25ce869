// SPDX-License-Identifier: MPL-2.0
//! Gallery overlay rendering.

use super::{GalleryTarget, Message, State};
use crate::diagnostics::CloseReason;
use crate::domain::gallery::{GalleryItem, ImageRef};
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::swipe_area;
use fluent_bundle::FluentValue;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Row, Scrollable, Space,
    Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageCache,
}

/// Renders the modal overlay, or nothing when closed.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let session = state.viewer().session()?;
    let item = session.item();
    let index = session.current_index();

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseRequested(CloseReason::Backdrop));

    let mut panel = Column::new()
        .spacing(spacing::SM)
        .push(header(state, item, &ctx))
        .push(main_image(state, item, index, &ctx))
        .push(caption(item, index, &ctx));

    if item.is_navigable() {
        panel = panel.push(thumbnails(state, item, index, &ctx));
    }

    if !item.description().is_empty() {
        panel = panel.push(Text::new(item.description()).size(typography::BODY));
    }

    let panel = Container::new(panel)
        .padding(spacing::LG)
        .max_width(1100.0)
        .style(styles::container::gallery_panel(state.container_focused()));

    // Clicks on the panel must not fall through to the backdrop.
    let content = Container::new(mouse_area(panel).on_press(Message::PanelPressed))
        .padding(spacing::XL)
        .center(Length::Fill);

    Some(Stack::new().push(backdrop).push(content).into())
}

fn header<'a>(state: &State, item: &'a GalleryItem, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(item.title()).size(typography::TITLE_MD));
    let subtitle = [item.meta(), item.location()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    if !subtitle.is_empty() {
        titles = titles.push(Text::new(subtitle).size(typography::CAPTION));
    }

    let close = control(
        "×",
        ctx.i18n.tr("gallery-close"),
        Message::CloseRequested(CloseReason::CloseButton),
        state.focused() == Some(GalleryTarget::Close),
    );

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(close)
        .into()
}

fn main_image<'a>(
    state: &State,
    item: &'a GalleryItem,
    index: usize,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match item.image(index) {
        Some(image_ref) => image_or_placeholder(image_ref, ctx),
        None => placeholder(ctx.i18n.tr("gallery-image-unavailable")),
    };

    let mut layers = Stack::new().push(
        Container::new(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill),
    );

    if item.is_navigable() {
        let previous = control(
            "‹",
            ctx.i18n.tr("gallery-previous"),
            Message::PreviousPressed,
            state.focused() == Some(GalleryTarget::Previous),
        );
        let next = control(
            "›",
            ctx.i18n.tr("gallery-next"),
            Message::NextPressed,
            state.focused() == Some(GalleryTarget::Next),
        );
        layers = layers.push(
            Row::new()
                .padding(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .height(Length::Fill)
                .push(previous)
                .push(Space::new().width(Length::Fill))
                .push(next),
        );
    }

    let region = Container::new(layers)
        .width(Length::Fill)
        .height(Length::FillPortion(4));

    swipe_area(region, Message::Swipe).into()
}

fn caption<'a>(item: &'a GalleryItem, index: usize, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = index + 1;
    let alt = ctx.i18n.tr_with_args(
        "gallery-image-alt",
        &[
            ("title", FluentValue::from(item.alt())),
            ("index", FluentValue::from(position)),
        ],
    );
    let counter = ctx.i18n.tr_with_args(
        "gallery-counter",
        &[
            ("current", FluentValue::from(position)),
            ("total", FluentValue::from(item.image_count())),
        ],
    );

    Row::new()
        .spacing(spacing::MD)
        .push(Text::new(alt).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(counter).size(typography::CAPTION))
        .into()
}

fn thumbnails<'a>(
    state: &State,
    item: &'a GalleryItem,
    index: usize,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let strip = item
        .gallery()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (i, image_ref)| {
            let content: Element<'a, Message> = match ctx.images.status(image_ref) {
                ImageStatus::Ready(handle) => image(handle)
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .into(),
                _ => Container::new(Text::new((i + 1).to_string()))
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL))
                    .center(Length::Fixed(sizing::THUMBNAIL))
                    .style(styles::container::image_placeholder)
                    .into(),
            };
            let label = ctx
                .i18n
                .tr_with_args("gallery-thumbnail", &[("index", FluentValue::from(i + 1))]);
            let thumb = button(content)
                .padding(spacing::XXS)
                .on_press(Message::ThumbnailPressed(i))
                .style(styles::button::thumbnail(
                    i == index,
                    state.focused() == Some(GalleryTarget::Thumbnail(i)),
                ));
            row.push(tooltip(thumb, Text::new(label), tooltip::Position::Top).gap(spacing::XXS))
        });

    Scrollable::new(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

fn image_or_placeholder<'a>(image_ref: &ImageRef, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.images.status(image_ref) {
        ImageStatus::Ready(handle) => image(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageStatus::Failed => placeholder(ctx.i18n.tr("gallery-image-unavailable")),
        ImageStatus::Loading | ImageStatus::Unknown => {
            placeholder(ctx.i18n.tr("gallery-image-loading"))
        }
    }
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .style(styles::container::image_placeholder)
        .into()
}

/// Round overlay button with a tooltip carrying its accessible label.
fn control<'a>(
    glyph: &'a str,
    label: String,
    message: Message,
    focused: bool,
) -> Element<'a, Message> {
    let glyph = Container::new(Text::new(glyph).size(typography::TITLE_MD)).center(Length::Fill);
    let body = button(glyph)
        .width(Length::Fixed(sizing::HIT_TARGET))
        .height(Length::Fixed(sizing::HIT_TARGET))
        .on_press(message)
        .style(styles::button::overlay_control(focused));

    tooltip(body, Text::new(label), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::focus::PageTarget;
    use std::sync::Arc;

    fn state_with(images: usize) -> State {
        let gallery = (0..images)
            .map(|i| ImageRef::new(format!("img-{i}.jpg")))
            .collect();
        let item = GalleryItem::new("Al Jazeera Tower", gallery)
            .expect("non-empty")
            .with_meta("Commercial")
            .with_location("Doha");
        let mut state = State::default();
        state.open(Arc::new(item), Some(PageTarget::Card(0)));
        state
    }

    #[test]
    fn closed_gallery_renders_nothing() {
        let i18n = I18n::default();
        let cache = ImageCache::default();
        let state = State::default();
        assert!(view(&state, ViewContext { i18n: &i18n, images: &cache }).is_none());
    }

    #[test]
    fn open_gallery_renders() {
        let i18n = I18n::default();
        let cache = ImageCache::default();
        let state = state_with(4);
        assert!(view(&state, ViewContext { i18n: &i18n, images: &cache }).is_some());
    }

    #[test]
    fn single_image_gallery_renders() {
        let i18n = I18n::default();
        let cache = ImageCache::default();
        let state = state_with(1);
        assert!(view(&state, ViewContext { i18n: &i18n, images: &cache }).is_some());
    }
}
