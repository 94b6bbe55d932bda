// SPDX-License-Identifier: MPL-2.0
//! Rendering of the home screen.
//!
//! Every block is drawn at exactly the height the page layout gave it, so
//! the observer spans match what is on screen.

use super::{Message, RevealKey, State, SCROLLABLE_ID};
use crate::content::SiteContent;
use crate::domain::ui::Percent;
use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::contact;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::{Block, SectionId, Span, FORM_GROUPS, TIMELINE_ENTRY_HEIGHT};
use crate::ui::reveal::sequencer::FADE_OFFSET_PX;
use crate::ui::reveal::ImageSlot;
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub content: &'a SiteContent,
    pub now: Instant,
    /// Shown in the footer copyright line.
    pub year: i32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let layout = ctx.state.layout();
    let mut page = Column::new().width(Length::Fill);

    for (block, span) in layout.blocks() {
        let height = match block {
            Block::FormGroup(0) => {
                let actions = layout
                    .span(Block::FormActions)
                    .map_or(0.0, |span| span.height);
                layout.form_span().map_or(span.height, |form| form.height) + actions
            }
            Block::FormGroup(_) | Block::FormActions => continue,
            _ => span.height,
        };
        page = page.push(
            Container::new(render_block(&ctx, block, span))
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .clip(true),
        );
    }

    Scrollable::new(page)
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn render_block<'a>(ctx: &ViewContext<'a>, block: Block, span: Span) -> Element<'a, Message> {
    match block {
        Block::Hero => hero(ctx, span.height),
        Block::SectionTitle(section) => section_title(ctx, section),
        Block::About => about(ctx),
        Block::Badges => badges(ctx),
        Block::Counter => counter(ctx),
        Block::Metrics => metrics(ctx),
        Block::Tags => tags(ctx),
        Block::Carousel => specialties(ctx),
        Block::Bar(index) => bar(ctx, index),
        Block::TimelineProgress => centered(progress_line(ctx.state.timeline_progress(ctx.now))),
        Block::Timeline => timeline(ctx),
        Block::FormGroup(_) | Block::FormActions => contact_form(ctx),
        Block::Footer => footer(ctx),
    }
}

/// Limits content to the readable column width.
fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

fn fading<'a>(
    content: impl Into<Element<'a, Message>>,
    offset: f32,
) -> Element<'a, Message> {
    Column::new()
        .push(Space::new().height(Length::Fixed(offset)))
        .push(content)
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>, height: f32) -> Element<'a, Message> {
    let firm = &ctx.content.firm;
    let progress = ctx.state.reveal_progress(RevealKey::Hero, ctx.now);

    let text = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(firm.headline.as_str())
                .size(typography::DISPLAY)
                .style(styles::text::colored(fade(palette::WHITE, progress))),
        )
        .push(
            Text::new(firm.tagline.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::colored(fade(palette::GRAY_100, progress))),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-cta")).size(typography::BODY_LG))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::GoTo(SectionId::Contact))
                .style(styles::button::primary),
        );

    let foreground = Container::new(fading(text, FADE_OFFSET_PX * (1.0 - progress)))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .padding(spacing::XL);

    let mut stack = Stack::new().width(Length::Fill).height(Length::Fixed(height));
    stack = stack.push(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::band),
    );
    if let Some(path) = ctx.state.images().get(ImageSlot::Hero) {
        stack = stack.push(
            image(path.to_path_buf())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(0.35),
        );
    }
    stack.push(foreground).into()
}

fn fade(color: iced::Color, alpha: f32) -> iced::Color {
    iced::Color {
        a: color.a * alpha,
        ..color
    }
}

fn section_title<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    let key = RevealKey::Section(section);
    let progress = ctx.state.reveal_progress(key, ctx.now);
    let title = Text::new(ctx.i18n.tr(section.label_key()))
        .size(typography::TITLE_LG)
        .style(styles::text::faded(progress));

    Container::new(fading(title, FADE_OFFSET_PX * (1.0 - progress)))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .into()
}

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let firm = &ctx.content.firm;
    let mut text = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(firm.about.as_str()).size(typography::BODY_LG));
    if !firm.registration.is_empty() {
        text = text.push(
            Text::new(firm.registration.as_str())
                .size(typography::BODY_SM)
                .style(styles::text::colored(palette::ACCENT_500)),
        );
    }

    let portrait = ctx.state.images().get(ImageSlot::Portrait).map(|path| {
        image(path.to_path_buf())
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(280.0))
            .height(Length::Fixed(340.0))
    });

    let body: Element<'a, Message> = if ctx.state.is_mobile() {
        let mut column = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center);
        if let Some(portrait) = portrait {
            column = column.push(portrait);
        }
        column.push(text).into()
    } else {
        let mut row = Row::new().spacing(spacing::XL);
        if let Some(portrait) = portrait {
            row = row.push(portrait);
        }
        row.push(text).into()
    };

    centered(body)
}

fn badges<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.content.stats.iter().enumerate().map(|(index, stat)| {
        let progress = ctx.state.reveal_progress(RevealKey::Badge(index), ctx.now);
        let card = Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(stat.value.as_str())
                        .size(typography::TITLE_LG)
                        .style(styles::text::colored(fade(palette::GOLD_500, progress))),
                )
                .push(
                    Text::new(stat.label.as_str())
                        .size(typography::BODY_SM)
                        .style(styles::text::faded(progress)),
                ),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card);
        fading(card, FADE_OFFSET_PX * (1.0 - progress))
    });

    if ctx.state.is_mobile() {
        centered(Column::with_children(items).spacing(spacing::SM))
    } else {
        centered(Row::with_children(items).spacing(spacing::MD))
    }
}

fn counter<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(counter) = ctx.content.counter.as_ref() else {
        return Space::new().into();
    };
    let value = ctx.state.counter_value(ctx.now).unwrap_or_default();

    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(format!("{value}{}", counter.suffix))
                    .size(typography::DISPLAY)
                    .style(styles::text::colored(palette::GOLD_500)),
            )
            .push(Text::new(counter.label.as_str()).size(typography::BODY_LG)),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(spacing::LG)
    .into()
}

fn metrics<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.content.metrics.iter().enumerate().map(|(index, metric)| {
        let progress = ctx.state.reveal_progress(RevealKey::Metric(index), ctx.now);
        fading(
            Column::new()
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .push(
                    Text::new(metric.value.as_str())
                        .size(typography::TITLE_LG)
                        .style(styles::text::faded(progress)),
                )
                .push(
                    Text::new(metric.label.as_str())
                        .size(typography::BODY_SM)
                        .style(styles::text::faded(progress)),
                ),
            FADE_OFFSET_PX * (1.0 - progress),
        )
    });

    if ctx.state.is_mobile() {
        centered(Column::with_children(items).spacing(spacing::SM))
    } else {
        centered(Row::with_children(items).spacing(spacing::MD))
    }
}

fn tags<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let chips = ctx.content.tags.iter().enumerate().map(|(index, tag)| {
        let progress = ctx.state.reveal_progress(RevealKey::Tag(index), ctx.now);
        Element::from(
            Container::new(
                Text::new(tag.as_str())
                    .size(typography::CAPTION)
                    .style(styles::text::faded(progress)),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::card),
        )
    });

    centered(
        Row::with_children(chips)
            .spacing(spacing::XS)
            .wrap()
            .vertical_spacing(spacing::XS),
    )
}

fn specialties<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let images = (0..ctx.content.specialties.len())
        .map(|index| ctx.state.images().get(ImageSlot::Specialty(index)))
        .collect();

    carousel::view::view(carousel::view::ViewContext {
        i18n: ctx.i18n,
        carousel: ctx.state.carousel(),
        specialties: &ctx.content.specialties,
        images,
        now: ctx.now,
    })
    .map(Message::Carousel)
}

fn bar<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let Some(bar) = ctx.content.bars.get(index) else {
        return Space::new().into();
    };
    let width = ctx.state.bar_width(index, ctx.now);

    centered(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .push(Text::new(bar.label.as_str()).size(typography::BODY_SM))
                    .push(Space::new().width(Length::Fill))
                    .push(
                        Text::new(format!("{:.0}%", width.value()))
                            .size(typography::BODY_SM),
                    ),
            )
            .push(progress_line(width)),
    )
}

fn progress_line<'a>(width: Percent) -> Element<'a, Message> {
    let filled = (width.as_fraction() * 1000.0).round() as u16;
    let mut row = Row::new().height(Length::Fill);
    if filled > 0 {
        row = row.push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::bar_fill),
        );
    }
    if filled < 1000 {
        row = row.push(Space::new().width(Length::FillPortion(1000 - filled)));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BAR_TRACK))
        .style(styles::container::bar_track)
        .into()
}

fn timeline<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let entries = ctx.content.timeline.iter().enumerate().map(|(index, entry)| {
        let (scale, lit) = ctx.state.marker(index, ctx.now);
        let size = sizing::TIMELINE_MARKER * scale;
        let marker = Container::new(
            Container::new(Space::new())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .style(styles::container::marker(lit)),
        )
        .width(Length::Fixed(sizing::TIMELINE_MARKER * 1.5))
        .center_x(Length::Fixed(sizing::TIMELINE_MARKER * 1.5));

        let year_color = if lit {
            palette::ACCENT_500
        } else {
            palette::GRAY_400
        };
        let text = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(entry.year.as_str())
                    .size(typography::TITLE_SM)
                    .style(styles::text::colored(year_color)),
            )
            .push(Text::new(entry.title.as_str()).size(typography::BODY_LG))
            .push(Text::new(entry.description.as_str()).size(typography::BODY_SM));

        Element::from(
            Row::new()
                .spacing(spacing::MD)
                .height(Length::Fixed(TIMELINE_ENTRY_HEIGHT))
                .push(marker)
                .push(text),
        )
    });

    centered(Column::with_children(entries))
}

fn contact_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rows: [f32; FORM_GROUPS] = std::array::from_fn(|row| {
        ctx.state
            .reveal_progress(RevealKey::FormGroup(row), ctx.now)
    });

    let form = contact::view::view(contact::view::ViewContext {
        i18n: ctx.i18n,
        form: ctx.state.form(),
        case_types: &ctx.content.case_types,
        rows,
    })
    .map(Message::Contact);

    Container::new(form)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Articles linked from the footer.
const FOOTER_ARTICLES: usize = 3;

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let firm = &ctx.content.firm;
    let i18n = ctx.i18n;

    let mut details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(firm.name.as_str()).size(typography::TITLE_MD));
    for line in [&firm.address, &firm.phone_display] {
        if !line.is_empty() {
            details = details.push(Text::new(line.as_str()).size(typography::BODY_SM));
        }
    }
    details = details.push(
        button(Text::new(i18n.tr("footer-email")).size(typography::BODY_SM))
            .padding(0)
            .on_press(Message::EmailPressed)
            .style(styles::button::link),
    );

    let mut columns = Row::new().spacing(spacing::XL).push(details);
    if !ctx.content.articles.is_empty() {
        let mut articles = Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("footer-articles")).size(typography::TITLE_MD));
        for (index, article) in ctx.content.articles.iter().take(FOOTER_ARTICLES).enumerate() {
            articles = articles.push(
                button(Text::new(article.title.as_str()).size(typography::BODY_SM))
                    .padding(0)
                    .on_press(Message::ArticlePressed(index))
                    .style(styles::button::link),
            );
        }
        columns = columns.push(articles);
    }

    let year = ctx.year.to_string();
    let copyright = Text::new(i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.as_str()), ("name", firm.name.as_str())],
    ))
    .size(typography::CAPTION)
    .style(styles::text::colored(palette::GRAY_200));

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(centered(columns))
            .push(centered(copyright)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([spacing::XL, 0.0])
    .style(styles::container::band)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use iced::Size;

    #[test]
    fn home_view_renders_desktop_and_mobile() {
        let i18n = I18n::default();
        let content = SiteContent::bundled().unwrap_or_default();
        let now = Instant::now();

        for size in [Size::new(1280.0, 800.0), Size::new(390.0, 844.0)] {
            let state = State::new(&content, &Config::default(), size, now);
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                content: &content,
                now,
                year: 2026,
            });
        }
    }

    #[test]
    fn empty_content_still_renders() {
        let i18n = I18n::default();
        let content = SiteContent::default();
        let now = Instant::now();
        let state = State::new(&content, &Config::default(), Size::new(1024.0, 768.0), now);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            content: &content,
            now,
            year: 2026,
        });
    }
}
