// SPDX-License-Identifier: MPL-2.0
//! Rendering of the specialties carousel.

use super::{Carousel, Message};
use crate::content::Specialty;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout::CAROUSEL_HEIGHT;
use crate::ui::styles;
use crate::ui::widgets::slide_track;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;
use std::time::Instant;

const ARROW_SIZE: f32 = 44.0;
const CARD_IMAGE_HEIGHT: f32 = 170.0;
const DOTS_HEIGHT: f32 = 40.0;

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a Carousel,
    pub specialties: &'a [Specialty],
    /// Resolved image of each card; `None` hides the picture.
    pub images: Vec<Option<&'a Path>>,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let card_height = CAROUSEL_HEIGHT - DOTS_HEIGHT - spacing::LG;

    let cards = ctx
        .specialties
        .iter()
        .enumerate()
        .fold(Row::new().spacing(ctx.carousel.gap()), |row, (index, specialty)| {
            let picture = ctx.images.get(index).copied().flatten();
            row.push(card(&ctx, index, specialty, picture, card_height))
        });

    let track = mouse_area(
        slide_track(cards, ctx.carousel.translate_x_at(ctx.now)).height(Length::Fixed(card_height)),
    )
    .on_enter(Message::PointerEntered)
    .on_exit(Message::PointerExited)
    .on_move(|point| Message::PointerMoved(point.x))
    .on_press(Message::PointerPressed)
    .on_release(Message::PointerReleased);

    let stage = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(arrow("‹", ctx.carousel.prev_enabled(), Message::Previous))
        .push(Container::new(track).width(Length::Fill))
        .push(arrow("›", ctx.carousel.next_enabled(), Message::Next));

    Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(stage)
        .push(dots(ctx.carousel))
        .width(Length::Fill)
        .height(Length::Fixed(CAROUSEL_HEIGHT))
        .into()
}

fn card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    specialty: &'a Specialty,
    picture: Option<&'a Path>,
    height: f32,
) -> Element<'a, Message> {
    let mut body = Column::new().spacing(spacing::SM);

    if let Some(path) = picture {
        body = body.push(
            image(path.to_path_buf())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fixed(CARD_IMAGE_HEIGHT)),
        );
    }

    body = body
        .push(Text::new(specialty.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(specialty.summary.as_str()).size(typography::BODY))
        .push(Space::new().height(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("carousel-consult")).size(typography::BODY))
                .on_press(Message::Consult(index))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fixed(ctx.carousel.slide_width()))
        .height(Length::Fixed(height))
        .style(styles::container::card)
        .into()
}

fn arrow<'a>(glyph: &'a str, enabled: bool, message: Message) -> Element<'a, Message> {
    let label = Text::new(glyph)
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let arrow = button(label)
        .width(Length::Fixed(ARROW_SIZE))
        .height(Length::Fixed(ARROW_SIZE))
        .padding(0)
        .style(styles::button::carousel_arrow);

    if enabled {
        arrow.on_press(message).into()
    } else {
        arrow.into()
    }
}

fn dots<'a>(carousel: &Carousel) -> Element<'a, Message> {
    carousel
        .dots()
        .fold(Row::new().spacing(spacing::XS), |row, (page, active)| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0)
                    .on_press(Message::GoTo(page))
                    .style(styles::button::dot(active)),
            )
        })
        .height(Length::Fixed(DOTS_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}
