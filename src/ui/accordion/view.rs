// SPDX-License-Identifier: MPL-2.0
//! Rendering of the blog accordion.

use super::{Accordion, Message, Visibility, ALL_CATEGORIES};
use crate::content::{Article, Category};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout::estimate_text_height;
use crate::ui::reveal::Sequencer;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Height of a panel header.
pub const HEADER_HEIGHT: f32 = 64.0;
/// Height of the category chip row above the panels.
pub const FILTER_HEIGHT: f32 = 56.0;
/// Vertical gap between panels.
pub const PANEL_SPACING: f32 = spacing::SM;

const BODY_PADDING: f32 = spacing::MD;
const CTA_HEIGHT: f32 = 48.0;
const FADING_ALPHA: f32 = 0.35;

/// Estimated height of an article body once expanded.
#[must_use]
pub fn measure_body(article: &Article, width: f32) -> f32 {
    let text_width = (width - 2.0 * BODY_PADDING).max(1.0);
    let mut height = 2.0 * BODY_PADDING
        + estimate_text_height(
            &article.body,
            text_width,
            typography::BODY,
            typography::LINE_HEIGHT,
        );
    if !article.excerpt.is_empty() {
        height += spacing::SM
            + estimate_text_height(
                &article.excerpt,
                text_width,
                typography::BODY_LG,
                typography::LINE_HEIGHT,
            );
    }
    if article.read_more {
        height += spacing::SM + CTA_HEIGHT;
    }
    height
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub accordion: &'a Accordion,
    pub articles: &'a [Article],
    pub categories: &'a [Category],
    /// Entrance reveals keyed by panel index.
    pub entrance: &'a Sequencer<usize>,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut panels = Column::new().spacing(PANEL_SPACING).width(Length::Fill);

    for (index, article) in ctx.articles.iter().enumerate() {
        if !ctx.accordion.is_displayed(index) {
            continue;
        }
        panels = panels.push(panel(&ctx, index, article));
    }

    Column::new()
        .spacing(spacing::MD)
        .push(filters(&ctx))
        .push(panels)
        .width(Length::Fill)
        .into()
}

fn filters<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.accordion.active_category();
    let all = chip(
        ctx.i18n.tr("blog-category-all"),
        ALL_CATEGORIES,
        active == ALL_CATEGORIES,
    );

    ctx.categories
        .iter()
        .fold(Row::new().spacing(spacing::XS).push(all), |row, category| {
            row.push(chip(
                category.label.clone(),
                &category.id,
                active == category.id,
            ))
        })
        .height(Length::Fixed(FILTER_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .into()
}

fn chip<'a>(label: String, id: &str, active: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::SelectCategory(id.to_string()))
        .style(styles::button::chip(active))
        .into()
}

fn panel<'a>(ctx: &ViewContext<'a>, index: usize, article: &'a Article) -> Element<'a, Message> {
    let accordion = ctx.accordion;
    let open = accordion.is_open(index);
    let entrance = ctx.entrance.progress(&index, ctx.now);
    let alpha = match accordion.visibility(index) {
        Visibility::FadingOut => entrance.min(FADING_ALPHA),
        _ => entrance,
    };

    let indicator = if accordion.indicator_rotation(index) >= 180.0 {
        "▲"
    } else {
        "▼"
    };

    let header_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(article.title.as_str())
                .size(typography::TITLE_SM)
                .style(styles::text::faded(alpha)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(category_label(ctx.categories, &article.category))
                .size(typography::CAPTION)
                .style(styles::text::faded(alpha)),
        )
        .push(
            Text::new(indicator)
                .size(typography::BODY)
                .style(styles::text::faded(alpha)),
        );

    let header = button(header_row)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([spacing::SM, spacing::MD])
        .on_press(Message::HeaderPressed(index))
        .style(styles::button::accordion_header(
            open,
            accordion.focused() == Some(index),
        ));

    let offset = ctx.entrance.slide_offset(&index, ctx.now);
    let mut column = Column::new()
        .push(Space::new().height(Length::Fixed(offset)))
        .push(header);

    let height = accordion.height_at(index, ctx.now);
    if height > 0.5 {
        column = column.push(
            Container::new(body(ctx, index, article))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .clip(true)
                .style(styles::container::panel),
        );
    }

    column.width(Length::Fill).into()
}

fn body<'a>(ctx: &ViewContext<'a>, index: usize, article: &'a Article) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).padding(BODY_PADDING);

    if !article.excerpt.is_empty() {
        column = column.push(Text::new(article.excerpt.as_str()).size(typography::BODY_LG));
    }
    column = column.push(Text::new(article.body.as_str()).size(typography::BODY));

    if article.read_more {
        column = column.push(
            button(Text::new(ctx.i18n.tr("blog-consult")).size(typography::BODY))
                .height(Length::Fixed(CTA_HEIGHT))
                .padding([spacing::SM, spacing::MD])
                .on_press(Message::Consult(index))
                .style(styles::button::primary),
        );
    }

    column.into()
}

fn category_label<'a>(categories: &'a [Category], id: &'a str) -> &'a str {
    categories
        .iter()
        .find(|category| category.id == id)
        .map_or(id, |category| category.label.as_str())
}
