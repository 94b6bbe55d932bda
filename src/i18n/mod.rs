// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization uses the Fluent system with translation files embedded from
//! `assets/i18n/`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Brazilian Portuguese as the fallback locale
//! - Runtime language switching

pub mod fluent;
