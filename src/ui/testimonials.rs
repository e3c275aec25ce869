// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel section.

use crate::content::Testimonial;
use crate::domain::carousel::Carousel;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::focus::PageTarget;
use crate::ui::styles;
use fluent_bundle::FluentValue;
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub testimonials: &'a [Testimonial],
    pub carousel: &'a Carousel,
    pub focused: Option<PageTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
}

/// Applies `message` to the carousel. Returns true if the slide changed.
pub fn update(carousel: &mut Carousel, message: Message, now: Instant) -> bool {
    match message {
        Message::Previous => carousel.previous(now),
        Message::Next => carousel.next(now),
        Message::GoTo(index) => carousel.go_to(index, now),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut section = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::TESTIMONIAL_MAX_WIDTH)
        .push(Text::new(ctx.i18n.tr("testimonials-heading")).size(typography::TITLE_LG));

    let Some(current) = ctx.testimonials.get(ctx.carousel.current()) else {
        return section.into();
    };

    section = section
        .push(Text::new(format!("“{}”", current.quote)).size(typography::BODY_LG))
        .push(Text::new(format!("— {}", current.author)).size(typography::BODY));

    if ctx.carousel.len() > 1 {
        section = section.push(controls(&ctx));
        let status = ctx.i18n.tr_with_args(
            "testimonials-status",
            &[
                ("current", FluentValue::from(ctx.carousel.current() + 1)),
                ("total", FluentValue::from(ctx.carousel.len())),
            ],
        );
        section = section.push(Text::new(status).size(typography::CAPTION));
    }

    Container::new(section).center_x(Length::Fill).into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let previous = button(Text::new("‹"))
        .on_press(Message::Previous)
        .style(styles::button::link(
            ctx.focused == Some(PageTarget::TestimonialPrevious),
        ));
    let next = button(Text::new("›"))
        .on_press(Message::Next)
        .style(styles::button::link(
            ctx.focused == Some(PageTarget::TestimonialNext),
        ));

    let dots = (0..ctx.carousel.len()).fold(Row::new().spacing(spacing::XS), |row, index| {
        let label = ctx
            .i18n
            .tr_with_args("testimonials-go-to", &[("index", FluentValue::from(index + 1))]);
        let focused = ctx.focused == Some(PageTarget::TestimonialDot(index));
        let dot = button(Space::new().width(spacing::SM).height(spacing::SM))
            .padding(if focused { spacing::XXS } else { 0.0 })
            .on_press(Message::GoTo(index))
            .style(styles::button::dot(index == ctx.carousel.current()));
        row.push(tooltip(dot, Text::new(label), tooltip::Position::Top))
    });

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(tooltip(
            previous,
            Text::new(ctx.i18n.tr("testimonials-previous")),
            tooltip::Position::Top,
        ))
        .push(dots)
        .push(tooltip(
            next,
            Text::new(ctx.i18n.tr("testimonials-next")),
            tooltip::Position::Top,
        ))
        .into()
}
