// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod slide_track;

pub use slide_track::slide_track;
