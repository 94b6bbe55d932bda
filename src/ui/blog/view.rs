// SPDX-License-Identifier: MPL-2.0
//! Rendering of the blog screen.

use super::{Message, State, HEADER_BLOCK_HEIGHT, SCROLLABLE_ID};
use crate::content::SiteContent;
use crate::i18n::fluent::I18n;
use crate::ui::accordion;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::NAV_HEIGHT;
use crate::ui::styles;
use iced::widget::{Column, Container, Id, Scrollable, Space, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Category chips plus the gap below them.
pub const FILTER_ROW_HEIGHT: f32 = accordion::view::FILTER_HEIGHT + spacing::MD;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub content: &'a SiteContent,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("blog-title")).size(typography::TITLE_LG))
            .push(
                Text::new(ctx.i18n.tr("blog-subtitle"))
                    .size(typography::BODY_LG)
                    .style(styles::text::colored(palette::GRAY_200)),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_BLOCK_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(HEADER_BLOCK_HEIGHT))
    .style(styles::container::band);

    let panels = accordion::view::view(accordion::view::ViewContext {
        i18n: ctx.i18n,
        accordion: ctx.state.accordion(),
        articles: &ctx.content.articles,
        categories: &ctx.content.categories,
        entrance: ctx.state.entrance(),
        now: ctx.now,
    })
    .map(Message::Accordion);

    let body = Container::new(
        Container::new(panels)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill);

    let page = Column::new()
        .width(Length::Fill)
        .push(Space::new().height(Length::Fixed(NAV_HEIGHT)))
        .push(header)
        .push(body)
        .push(Space::new().height(Length::Fixed(spacing::XXL)));

    Scrollable::new(page)
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use iced::Size;

    #[test]
    fn blog_view_renders() {
        let i18n = I18n::default();
        let content = SiteContent::bundled().unwrap_or_default();
        let now = Instant::now();
        let state = State::new(&content, &Config::default(), Size::new(1280.0, 800.0), now);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            content: &content,
            now,
        });
    }
}
