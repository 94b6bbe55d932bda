// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! UI-related value objects that are independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{breakpoints, is_mobile_width, CardsPerView, Percent, Threshold};
