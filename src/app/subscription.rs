// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are routed to the active screen: window resizes go to the
//! application on every screen, and keyboard navigation of the article
//! headers only exists on the blog.

use super::{Message, Screen};
use crate::ui::accordion;
use crate::ui::blog;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while something moves on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval while only deadlines are waiting.
pub const DEADLINE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Home => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        }),
        Screen::Blog => event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            // Keys already used by a focused text input stay there
            if status == event::Status::Captured {
                return None;
            }

            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
                return None;
            };
            let accordion_message = match key {
                Key::Named(Named::ArrowDown) => accordion::Message::FocusNext,
                Key::Named(Named::ArrowUp) => accordion::Message::FocusPrevious,
                Key::Named(Named::Enter | Named::Space) => accordion::Message::Activate,
                _ => return None,
            };
            Some(Message::Blog(blog::Message::Accordion(accordion_message)))
        }),
    }
}

/// Creates the frame tick that releases deadlines and drives animations.
///
/// Runs at frame rate while `animating`, at a coarser poll while only
/// deadlines wait, and not at all otherwise.
pub fn create_tick_subscription(animating: bool, waiting: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else if waiting {
        time::every(DEADLINE_POLL_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
