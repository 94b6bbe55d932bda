// SPDX-License-Identifier: MPL-2.0
//! `lexfolio` presents a law practice brochure as a native application built
//! with the Iced GUI framework.
//!
//! The home page combines a specialties carousel, scroll-triggered reveals and
//! a contact form that hands consultations over to WhatsApp. The blog page
//! holds a filterable article accordion with deep links. Text is localized
//! with Fluent and the site content is a TOML document that can be replaced
//! without rebuilding.

#![doc(html_root_url = "https://docs.rs/lexfolio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
