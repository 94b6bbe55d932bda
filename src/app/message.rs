// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::blog;
use crate::ui::cookie_notice;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Blog(blog::Message),
    Notification(notifications::NotificationMessage),
    CookieNotice(cookie_notice::Message),
    /// Shows a blog article: toggles it on the blog, or opens the blog
    /// with that article expanded.
    OpenBlogArticle(usize),
    /// The floating WhatsApp shortcut was pressed.
    FloatingWhatsapp,
    WindowResized(Size),
    /// Frame tick releasing deadlines and driving animations.
    Tick(Instant),
    /// Result of handing a link to the platform opener.
    LinkOpened(Result<(), String>),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Screen to open at startup (`home` or `blog`).
    pub page: Option<String>,
    /// Blog panel to open at startup, as `#open=N` would.
    pub open: Option<String>,
    /// Startup link such as `blog#open=2`; wins over `page` and `open`.
    pub link: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `LEXFOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml and content.toml).
    /// Takes precedence over `LEXFOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
