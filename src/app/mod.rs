// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home and blog screens.
//!
//! The `App` struct wires together the screens, localization, settings and
//! site content, and translates screen effects into side effects like link
//! opening, scrolling or state persistence. Every time-based behavior is
//! released from [`Message::Tick`], which runs at frame rate only while
//! something moves.

mod links;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Route, Screen};

use crate::config::{self, Config, RESIZE_DEBOUNCE_MS};
use crate::content::SiteContent;
use crate::domain::ui::is_mobile_width;
use crate::i18n::fluent::I18n;
use crate::ui::blog;
use crate::ui::floating_button::FloatingButton;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::state::Debouncer;
use crate::ui::theming::AppTheme;
use chrono::Datelike;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    content: SiteContent,
    navbar: navbar::State,
    home: home::State,
    blog: blog::State,
    floating: FloatingButton,
    /// Window sizes waiting for resizing to settle.
    resize: Debouncer<Size>,
    window_size: Size,
    theme: AppTheme,
    /// Persisted application state (cookie consent).
    app_state: persisted_state::AppState,
    data_dir: Option<PathBuf>,
    /// Banner notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("window_size", &self.window_size)
            .finish_non_exhaustive()
    }
}

/// Directories the application reads from and writes to.
#[derive(Debug, Clone, Default)]
struct Dirs {
    config: Option<PathBuf>,
    data: Option<PathBuf>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Where the visitor lands at startup.
///
/// `--link` wins; otherwise `--open` implies the blog and `--page` picks the
/// screen.
fn startup_route(flags: &Flags) -> Route {
    if let Some(link) = flags.link.as_deref() {
        return Route::parse(link);
    }
    if let Some(open) = flags.open.as_deref() {
        return Route {
            screen: Screen::Blog,
            section: None,
            fragment: Some(format!("open={}", open.trim())),
        };
    }
    let screen = flags.page.as_deref().map_or(Screen::Home, |page| {
        Screen::from_name(page).unwrap_or_else(|| {
            tracing::warn!(page, "unknown page, showing home");
            Screen::Home
        })
    });
    Route {
        screen,
        ..Route::default()
    }
}

impl App {
    /// Initializes application state from the resolved directories and the
    /// launcher `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let dirs = Dirs {
            config: paths::get_app_config_dir(),
            data: paths::get_app_data_dir(),
        };
        (Self::boot(&flags, dirs, Instant::now()), Task::none())
    }

    fn boot(flags: &Flags, dirs: Dirs, now: Instant) -> Self {
        let (config, config_warning) = config::load_with_override(dirs.config.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (content, content_warning) = SiteContent::load(dirs.config.clone());
        let (app_state, state_warning) = persisted_state::AppState::load_from(dirs.data.clone());

        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let mut navbar = navbar::State::default();
        navbar.set_mobile(is_mobile_width(window_size.width));

        let mut notifications = notifications::Manager::new(config.reveal.notification_dismiss());
        for key in [config_warning, content_warning, state_warning]
            .into_iter()
            .flatten()
        {
            notifications.push(Notification::error(key), now);
        }

        let mut app = Self {
            i18n,
            screen: Screen::Home,
            home: home::State::new(&content, &config, window_size, now),
            blog: blog::State::new(&content, &config, window_size, now),
            navbar,
            floating: FloatingButton::new(now),
            resize: Debouncer::new(Duration::from_millis(RESIZE_DEBOUNCE_MS)),
            window_size,
            theme: AppTheme::new(config.general.theme_mode),
            app_state,
            data_dir: dirs.data,
            notifications,
            config,
            content,
        };

        let route = startup_route(flags);
        tracing::info!(screen = ?route.screen, "starting");
        app.screen = route.screen;
        if let Some(fragment) = route.fragment.as_deref() {
            if app.blog.apply_deep_link(fragment, now).is_none() {
                tracing::warn!(fragment, "deep link names no panel");
            }
        }
        if let Some(section) = route.section {
            app.home.scroll_to_section(section, now);
        }
        app
    }

    fn title(&self) -> String {
        let app_name = if self.content.firm.name.is_empty() {
            self.i18n.tr("window-title")
        } else {
            self.content.firm.name.clone()
        };
        match self.screen {
            Screen::Home => app_name,
            Screen::Blog => format!("{} - {app_name}", self.i18n.tr("blog-title")),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Earliest deadline across everything the tick releases.
    fn next_deadline(&self, now: Instant) -> Option<Instant> {
        [
            Some(self.floating.next_deadline(now)),
            self.resize.deadline(),
            self.notifications.next_deadline(),
            self.home.next_deadline(),
            self.blog.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let animating = match self.screen {
            Screen::Home => self.home.is_animating(now),
            Screen::Blog => self.blog.is_animating(now),
        };
        let next_deadline = self.next_deadline(now);
        let due_soon = next_deadline
            .is_some_and(|deadline| deadline <= now + subscription::DEADLINE_POLL_INTERVAL);

        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(animating || due_soon, next_deadline.is_some());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Applies `message` as if it arrived at `now`.
    fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            content: &self.content,
            whatsapp_number: self.config.contact.whatsapp_number(),
            navbar: &mut self.navbar,
            home: &mut self.home,
            blog: &mut self.blog,
            resize: &mut self.resize,
            window_size: &mut self.window_size,
            app_state: &mut self.app_state,
            data_dir: self.data_dir.as_deref(),
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message, now)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message, now),
            Message::Blog(blog_message) => update::handle_blog_message(&mut ctx, blog_message, now),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::CookieNotice(notice_message) => {
                update::handle_cookie_notice_message(&mut ctx, notice_message, now)
            }
            Message::OpenBlogArticle(index) => {
                update::handle_open_blog_article(&mut ctx, index, now)
            }
            Message::FloatingWhatsapp => update::handle_floating_whatsapp(&mut ctx),
            Message::WindowResized(size) => {
                update::handle_window_resized(&mut ctx, size, now);
                Task::none()
            }
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::LinkOpened(result) => update::handle_link_opened(&mut ctx, result, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            content: &self.content,
            navbar: &self.navbar,
            home: &self.home,
            blog: &self.blog,
            floating: &self.floating,
            notifications: &self.notifications,
            show_cookie_notice: !self.app_state.cookie_consent,
            now: Instant::now(),
            year: chrono::Local::now().year(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::accordion;
    use crate::ui::cookie_notice;
    use crate::ui::layout::SectionId;
    use tempfile::{tempdir, TempDir};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn boot_with(flags: Flags) -> (App, TempDir, Instant) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dirs = Dirs {
            config: Some(temp_dir.path().join("config")),
            data: Some(temp_dir.path().join("data")),
        };
        let now = Instant::now();
        (App::boot(&flags, dirs, now), temp_dir, now)
    }

    #[test]
    fn new_starts_on_home_with_cookie_notice() {
        let (app, _dir, _now) = boot_with(Flags::default());
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.app_state.cookie_consent);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn link_flag_opens_blog_panel() {
        let (mut app, _dir, now) = boot_with(Flags {
            link: Some("blog#open=2".into()),
            ..Flags::default()
        });
        assert_eq!(app.screen, Screen::Blog);

        let _ = app.update_at(Message::Tick(now + ms(600)), now + ms(600));
        assert!(app.blog.accordion().is_open(2));
    }

    #[test]
    fn open_flag_implies_blog() {
        let (app, _dir, _now) = boot_with(Flags {
            page: Some("home".into()),
            open: Some("1".into()),
            ..Flags::default()
        });
        assert_eq!(app.screen, Screen::Blog);
    }

    #[test]
    fn unknown_page_falls_back_to_home() {
        let route = startup_route(&Flags {
            page: Some("prices".into()),
            ..Flags::default()
        });
        assert_eq!(route.screen, Screen::Home);
    }

    #[test]
    fn navbar_switches_screens() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let _ = app.update_at(Message::Navbar(navbar::Message::OpenBlog), now);
        assert_eq!(app.screen, Screen::Blog);

        let _ = app.update_at(
            Message::Navbar(navbar::Message::GoTo(SectionId::Contact)),
            now,
        );
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn blog_consultation_prefills_home_form() {
        let (mut app, _dir, now) = boot_with(Flags {
            page: Some("blog".into()),
            ..Flags::default()
        });
        let title = app.content.articles[1].title.clone();

        let _ = app.update_at(
            Message::Blog(blog::Message::Accordion(accordion::Message::Consult(1))),
            now,
        );
        assert_eq!(app.screen, Screen::Home);

        let later = now + ms(1000);
        let _ = app.update_at(Message::Tick(later), later);
        assert_eq!(app.home.form().consult_title(), Some(title.as_str()));
    }

    #[test]
    fn article_link_from_home_opens_it_on_the_blog() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let _ = app.update_at(Message::Home(home::Message::ArticlePressed(1)), now);
        assert_eq!(app.screen, Screen::Blog);
        assert!(!app.blog.accordion().is_open(1));

        let later = now + ms(500);
        let _ = app.update_at(Message::Tick(later), later);
        assert!(app.blog.accordion().is_open(1));
        assert_eq!(app.blog.accordion().open_count(), 1);
    }

    #[test]
    fn article_link_on_the_blog_toggles_in_place() {
        let (mut app, _dir, now) = boot_with(Flags {
            page: Some("blog".into()),
            ..Flags::default()
        });
        let _ = app.update_at(Message::OpenBlogArticle(2), now);
        assert_eq!(app.screen, Screen::Blog);
        assert!(app.blog.accordion().is_open(2));

        let _ = app.update_at(Message::OpenBlogArticle(2), now);
        assert!(!app.blog.accordion().is_open(2));
    }

    #[test]
    fn article_link_to_a_missing_article_is_ignored() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let count = app.blog.accordion().panel_count();
        let _ = app.update_at(Message::OpenBlogArticle(count), now);
        assert_eq!(app.screen, Screen::Home);
        assert!(app.blog.accordion().next_deadline().is_none());
    }

    #[test]
    fn accepting_cookies_is_persisted() {
        let (mut app, dir, now) = boot_with(Flags::default());
        let _ = app.update_at(
            Message::CookieNotice(cookie_notice::Message::Accept),
            now,
        );
        assert!(app.app_state.cookie_consent);
        assert!(!app.notifications.has_notifications());

        let (state, warning) =
            persisted_state::AppState::load_from(Some(dir.path().join("data")));
        assert!(warning.is_none());
        assert!(state.cookie_consent);
    }

    #[test]
    fn resize_applies_after_debounce() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let _ = app.update_at(Message::WindowResized(Size::new(500.0, 800.0)), now);
        assert!(!app.navbar.is_mobile());

        let settled = now + ms(RESIZE_DEBOUNCE_MS + 10);
        let _ = app.update_at(Message::Tick(settled), settled);
        assert!(app.navbar.is_mobile());
        assert_eq!(app.window_size.width, 500.0);
    }

    #[test]
    fn failed_link_shows_notification() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let _ = app.update_at(Message::LinkOpened(Err("no opener".into())), now);
        assert_eq!(
            app.notifications.current().map(Notification::message_key),
            Some(update::LINK_OPEN_ERROR_KEY)
        );
    }

    #[test]
    fn malformed_settings_warn_and_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        std::fs::create_dir_all(&config_dir).expect("failed to create config dir");
        std::fs::write(config_dir.join("settings.toml"), "carousel = [").expect("write");

        let app = App::boot(
            &Flags::default(),
            Dirs {
                config: Some(config_dir),
                data: Some(temp_dir.path().join("data")),
            },
            Instant::now(),
        );
        assert_eq!(app.config, Config::default());
        assert_eq!(
            app.notifications.current().map(Notification::message_key),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn title_names_the_blog() {
        let (mut app, _dir, now) = boot_with(Flags::default());
        let home_title = app.title();
        let _ = app.update_at(Message::Navbar(navbar::Message::OpenBlog), now);
        assert_ne!(app.title(), home_title);
        assert!(app.title().ends_with(&home_title));
    }
}
