// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report what should happen outside of them as effects. The
//! handlers here turn those into widget operations, opener tasks and
//! notifications.

use super::{links, persisted_state::AppState, Message, Screen};
use crate::content::SiteContent;
use crate::domain::ui::is_mobile_width;
use crate::i18n::fluent::I18n;
use crate::ui::accordion;
use crate::ui::blog;
use crate::ui::contact::whatsapp::whatsapp_url;
use crate::ui::cookie_notice;
use crate::ui::home;
use crate::ui::layout::SectionId;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::state::Debouncer;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{Size, Task};
use std::path::Path;
use std::time::Instant;

/// I18n key shown when the platform opener fails.
pub const LINK_OPEN_ERROR_KEY: &str = "notification-link-open-error";

/// Mutable view of the application handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub content: &'a SiteContent,
    pub whatsapp_number: &'a str,
    pub navbar: &'a mut navbar::State,
    pub home: &'a mut home::State,
    pub blog: &'a mut blog::State,
    pub resize: &'a mut Debouncer<Size>,
    pub window_size: &'a mut Size,
    pub app_state: &'a mut AppState,
    /// Directory the persisted state is written to.
    pub data_dir: Option<&'a Path>,
    pub notifications: &'a mut notifications::Manager,
}

/// Switches screens, starting the target page from its top.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen, now: Instant) {
    if *ctx.screen == target {
        return;
    }
    tracing::debug!(from = ?ctx.screen, to = ?target, "switching screen");
    *ctx.screen = target;
    match target {
        Screen::Home => ctx.home.reset_scroll(now),
        Screen::Blog => ctx.blog.reset_scroll(now),
    }
    follow_scroll(ctx);
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
    now: Instant,
) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::GoTo(section) => go_to_section(ctx, section, now),
        NavbarEvent::OpenBlog => {
            handle_screen_switch(ctx, Screen::Blog, now);
            Task::none()
        }
    }
}

fn go_to_section(ctx: &mut UpdateContext<'_>, section: SectionId, now: Instant) -> Task<Message> {
    handle_screen_switch(ctx, Screen::Home, now);
    ctx.home.scroll_to_section(section, now);
    Task::none()
}

pub fn handle_home_message(
    ctx: &mut UpdateContext<'_>,
    message: home::Message,
    now: Instant,
) -> Task<Message> {
    let scrolled = matches!(message, home::Message::Scrolled(_));
    let today = chrono::Local::now().date_naive();
    let effects = ctx.home.update(message, ctx.content, now, today);
    if scrolled {
        follow_scroll(ctx);
    }
    run_home_effects(ctx, effects, now)
}

pub fn handle_blog_message(
    ctx: &mut UpdateContext<'_>,
    message: blog::Message,
    now: Instant,
) -> Task<Message> {
    let scrolled = matches!(message, blog::Message::Scrolled(_));
    let effects = ctx.blog.update(message, now);
    if scrolled {
        follow_scroll(ctx);
    }
    run_blog_effects(ctx, effects, now)
}

/// Toggles the article in place on the blog. From any other screen the blog
/// opens with the article scheduled as a `#open=<index>` link would.
pub fn handle_open_blog_article(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    now: Instant,
) -> Task<Message> {
    if index >= ctx.blog.accordion().panel_count() {
        tracing::debug!(index, "no such article");
        return Task::none();
    }
    if *ctx.screen == Screen::Blog {
        return handle_blog_message(
            ctx,
            blog::Message::Accordion(accordion::Message::HeaderPressed(index)),
            now,
        );
    }
    handle_screen_switch(ctx, Screen::Blog, now);
    ctx.blog.apply_deep_link(&format!("open={index}"), now);
    Task::none()
}

pub fn handle_cookie_notice_message(
    ctx: &mut UpdateContext<'_>,
    message: cookie_notice::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        cookie_notice::Message::Accept => {
            ctx.app_state.cookie_consent = true;
            if let Some(key) = ctx.app_state.save_to(ctx.data_dir.map(Path::to_path_buf)) {
                ctx.notifications.push(Notification::error(key), now);
            }
        }
    }
    Task::none()
}

/// Opens a WhatsApp chat with the default greeting.
pub fn handle_floating_whatsapp(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let url = whatsapp_url(ctx.whatsapp_number, &ctx.i18n.tr("floating-whatsapp-text"));
    open_link(url)
}

/// Records a window size; the layouts follow once resizing settles.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size, now: Instant) {
    ctx.resize.trigger(now, size);
}

pub fn handle_link_opened(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), String>,
    now: Instant,
) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!(error = %err, "could not open link");
        ctx.notifications
            .push(Notification::error(LINK_OPEN_ERROR_KEY), now);
    }
    Task::none()
}

/// Releases everything due at `now` on both screens.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if let Some(size) = ctx.resize.poll(now) {
        apply_window_size(ctx, size, now);
    }
    ctx.notifications.tick(now);

    let home_effects = ctx.home.tick(now);
    let blog_effects = ctx.blog.tick(now);
    follow_scroll(ctx);

    Task::batch([
        run_home_effects(ctx, home_effects, now),
        run_blog_effects(ctx, blog_effects, now),
    ])
}

fn apply_window_size(ctx: &mut UpdateContext<'_>, size: Size, now: Instant) {
    tracing::debug!(width = size.width, height = size.height, "window size settled");
    *ctx.window_size = size;
    ctx.home.relayout(ctx.content, size, now);
    ctx.blog.relayout(ctx.content, size, now);
    ctx.navbar.set_mobile(is_mobile_width(size.width));
}

/// Keeps the navigation bar style in step with the visible page.
fn follow_scroll(ctx: &mut UpdateContext<'_>) {
    let scroll_y = match ctx.screen {
        Screen::Home => ctx.home.scroll_y(),
        Screen::Blog => ctx.blog.scroll_y(),
    };
    ctx.navbar.on_scroll(scroll_y);
}

fn run_home_effects(
    ctx: &mut UpdateContext<'_>,
    effects: Vec<home::Effect>,
    now: Instant,
) -> Task<Message> {
    let on_screen = *ctx.screen == Screen::Home;
    let tasks: Vec<Task<Message>> = effects
        .into_iter()
        .map(|effect| match effect {
            home::Effect::ScrollTo(y) if on_screen => scroll_page(home::SCROLLABLE_ID, y),
            home::Effect::ScrollTo(_) => Task::none(),
            home::Effect::Focus(id) if on_screen => operation::focus(Id::new(id)),
            home::Effect::Focus(_) => Task::none(),
            home::Effect::OpenUrl(url) => open_link(url),
            home::Effect::OpenArticle(index) => handle_open_blog_article(ctx, index, now),
            home::Effect::Notify(notification) => {
                ctx.notifications.push(notification, now);
                Task::none()
            }
        })
        .collect();
    Task::batch(tasks)
}

fn run_blog_effects(
    ctx: &mut UpdateContext<'_>,
    effects: Vec<blog::Effect>,
    now: Instant,
) -> Task<Message> {
    let mut tasks = Vec::new();
    for effect in effects {
        match effect {
            blog::Effect::ScrollTo(y) => {
                if *ctx.screen == Screen::Blog {
                    tasks.push(scroll_page(blog::SCROLLABLE_ID, y));
                }
            }
            blog::Effect::Consult(index) => {
                let title = ctx
                    .content
                    .articles
                    .get(index)
                    .map(|article| article.title.clone());
                handle_screen_switch(ctx, Screen::Home, now);
                ctx.home.request_consultation(title.as_deref(), now);
            }
        }
    }
    Task::batch(tasks)
}

fn scroll_page(id: &'static str, y: f32) -> Task<Message> {
    operation::scroll_to(Id::new(id), AbsoluteOffset { x: 0.0, y })
}

fn open_link(url: String) -> Task<Message> {
    Task::perform(links::open(url), Message::LinkOpened)
}
