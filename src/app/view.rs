// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active page fills the window; the navigation bar, the notification
//! banner, the floating WhatsApp button and the cookie notice are layered
//! over it.

use super::{Message, Screen};
use crate::content::SiteContent;
use crate::i18n::fluent::I18n;
use crate::ui::blog;
use crate::ui::cookie_notice;
use crate::ui::design_tokens::spacing;
use crate::ui::floating_button::{self, FloatingButton};
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::reveal::ImageSlot;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Room left under the floating button while the cookie notice is up.
const NOTICE_CLEARANCE: f32 = 88.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub content: &'a SiteContent,
    pub navbar: &'a navbar::State,
    pub home: &'a home::State,
    pub blog: &'a blog::State,
    pub floating: &'a FloatingButton,
    pub notifications: &'a notifications::Manager,
    pub show_cookie_notice: bool,
    pub now: Instant,
    pub year: i32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view::view(home::view::ViewContext {
            i18n: ctx.i18n,
            state: ctx.home,
            content: ctx.content,
            now: ctx.now,
            year: ctx.year,
        })
        .map(Message::Home),
        Screen::Blog => blog::view::view(blog::view::ViewContext {
            i18n: ctx.i18n,
            state: ctx.blog,
            content: ctx.content,
            now: ctx.now,
        })
        .map(Message::Blog),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        page: ctx.screen.page(),
        firm_name: &ctx.content.firm.name,
        logo: ctx.home.images().get(ImageSlot::Logo),
    })
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(
            Column::new()
                .width(Length::Fill)
                .push(navbar_view),
        )
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    if let Some(button) =
        floating_button::view(ctx.floating, ctx.now, Message::FloatingWhatsapp)
    {
        let bottom = if ctx.show_cookie_notice {
            NOTICE_CLEARANCE
        } else {
            spacing::LG
        };
        layers = layers.push(
            Container::new(button)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(iced::Padding {
                    top: 0.0,
                    right: spacing::LG,
                    bottom,
                    left: 0.0,
                }),
        );
    }

    if ctx.show_cookie_notice {
        layers = layers.push(
            Container::new(cookie_notice::view(ctx.i18n).map(Message::CookieNotice))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    layers.into()
}
