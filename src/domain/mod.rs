// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`CardsPerView`](ui::CardsPerView),
//!   [`Threshold`](ui::Threshold), [`Percent`](ui::Percent))

pub mod ui;
