// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by the unit tests.
//!
//! Animation values are computed from eased floats, so comparisons go through
//! the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for positions and heights in logical pixels.
pub const PX_EPSILON: f32 = 0.01;
