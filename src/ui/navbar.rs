// SPDX-License-Identifier: MPL-2.0
//! Navigation bar.
//!
//! Wide windows show every section link inline. Narrow windows (the mobile
//! view) collapse them behind a toggle that swaps between a bars and a close
//! glyph. Any link closes the menu. Once the page scrolled past a threshold
//! the bar switches from its transparent gradient to a solid fill.

use crate::config::NAV_SCROLLED_THRESHOLD_PX;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::layout::{SectionId, NAV_HEIGHT};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;

const MENU_TOGGLE_SIZE: f32 = 44.0;
const LOGO_HEIGHT: f32 = 48.0;

/// Which page the bar is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Blog,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    menu_open: bool,
    solid: bool,
    mobile: bool,
}

impl State {
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the bar uses its scrolled, solid style.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.solid
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Follows the page scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        self.solid = scroll_y > NAV_SCROLLED_THRESHOLD_PX;
    }

    /// Applies a (debounced) window width.
    pub fn set_mobile(&mut self, mobile: bool) {
        if self.mobile != mobile {
            tracing::debug!(mobile, "navigation layout changed");
        }
        self.mobile = mobile;
        if !mobile {
            self.menu_open = false;
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    GoTo(SectionId),
    OpenBlog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Scroll the home page to this section, switching page when needed.
    GoTo(SectionId),
    OpenBlog,
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::GoTo(section) => {
            state.menu_open = false;
            Event::GoTo(section)
        }
        Message::OpenBlog => {
            state.menu_open = false;
            Event::OpenBlog
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub page: Page,
    pub firm_name: &'a str,
    pub logo: Option<&'a Path>,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut top = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand(&ctx))
        .push(Space::new().width(Length::Fill));

    if ctx.state.mobile {
        top = top.push(menu_toggle(ctx.state.menu_open));
    } else {
        top = links(&ctx).into_iter().fold(top, |row, link| row.push(link));
    }

    let bar = Container::new(top)
        .height(Length::Fixed(NAV_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .style(styles::container::nav_bar(ctx.state.solid));

    let mut content = Column::new().width(Length::Fill).push(bar);

    if ctx.state.mobile && ctx.state.menu_open {
        let menu = links(&ctx)
            .into_iter()
            .fold(Column::new().spacing(spacing::XXS), |column, link| {
                column.push(link)
            });
        content = content.push(
            Container::new(menu)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::nav_bar(true)),
        );
    }

    content.into()
}

fn brand<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = Text::new(ctx.firm_name)
        .size(typography::TITLE_SM)
        .style(styles::text::colored(palette::WHITE));

    let content: Element<'a, Message> = match ctx.logo {
        Some(path) => Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(
                image(path.to_path_buf())
                    .content_fit(ContentFit::Contain)
                    .height(Length::Fixed(LOGO_HEIGHT)),
            )
            .push(name)
            .into(),
        None => name.into(),
    };

    button(content)
        .padding(0)
        .on_press(Message::GoTo(SectionId::Home))
        .style(styles::button::link)
        .into()
}

fn menu_toggle<'a>(open: bool) -> Element<'a, Message> {
    let glyph = if open { "✕" } else { "☰" };
    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .style(styles::text::colored(palette::WHITE)),
    )
    .width(Length::Fixed(MENU_TOGGLE_SIZE))
    .height(Length::Fixed(MENU_TOGGLE_SIZE))
    .padding(0)
    .on_press(Message::ToggleMenu)
    .style(styles::button::nav_link(open))
    .into()
}

fn links<'a>(ctx: &ViewContext<'a>) -> Vec<Element<'a, Message>> {
    let mut items: Vec<Element<'a, Message>> = SectionId::ALL
        .into_iter()
        .map(|section| {
            link(
                ctx.i18n.tr(section.label_key()),
                Message::GoTo(section),
                false,
            )
        })
        .collect();
    items.push(link(
        ctx.i18n.tr("nav-blog"),
        Message::OpenBlog,
        ctx.page == Page::Blog,
    ));
    items
}

fn link<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .on_press(message)
        .style(styles::button::nav_link(active))
        .into()
}
