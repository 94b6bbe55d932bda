// SPDX-License-Identifier: MPL-2.0
//! Transient banners for visitor feedback.
//!
//! Form validation errors, submission confirmations and load warnings are
//! shown as a colored banner that closes by itself after a few seconds.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` holding the single visible banner and its deadline
//! - [`toast`] - Banner widget
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::default();
//! manager.push(Notification::error("contact-error-required"), now);
//!
//! let banner = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
