// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern. Engines take the current
//! `Instant` explicitly and keep their pending work as deadlines, which the
//! application releases from a frame tick.
//!
//! # Screens
//!
//! - [`home`] - The scrolling site page: hero, about, specialties, results, timeline, contact
//! - [`blog`] - Article accordion with category filter and deep links
//!
//! # Engines
//!
//! - [`carousel`] - Paged specialties carousel with autoplay and swipe
//! - [`accordion`] - Single-open article panels
//! - [`contact`] - Consultation form, phone mask and WhatsApp link composition
//! - [`reveal`] - Visibility observers, staggered reveals and small animations
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable time-driven state (deadlines, debounce, tweens, viewport)
//! - [`layout`] - Page block stack and scroll geometry
//! - [`widgets`] - Custom Iced widgets (slide track)
//! - [`styles`] - Centralized styling (buttons, containers, inputs, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with mobile menu
//! - [`notifications`] - Toast notification system for user feedback
//! - [`floating_button`] - Floating WhatsApp shortcut
//! - [`cookie_notice`] - Cookie consent banner

pub mod accordion;
pub mod blog;
pub mod carousel;
pub mod contact;
pub mod cookie_notice;
pub mod design_tokens;
pub mod floating_button;
pub mod home;
pub mod layout;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
