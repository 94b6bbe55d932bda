// SPDX-License-Identifier: MPL-2.0
//! UI state building blocks
//!
//! Time-driven helpers shared by the engines: deadline queues, debouncing,
//! tweens, swipe tracking, and the page viewport.

pub mod debounce;
pub mod schedule;
pub mod smooth_scroll;
pub mod swipe;
pub mod tween;
pub mod viewport;

// Re-export commonly used types for convenience
pub use debounce::Debouncer;
pub use schedule::Schedule;
pub use smooth_scroll::SmoothScroll;
pub use swipe::{SwipeDirection, SwipeState};
pub use tween::{Easing, Tween};
pub use viewport::ViewportState;
