// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling of a page scrollable.
//!
//! Scrollables jump to an offset; gliding there means emitting one offset per
//! frame until the tween settles.

use crate::ui::state::tween::{Easing, Tween};
use std::time::{Duration, Instant};

/// Length of an anchor scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothScroll {
    tween: Option<Tween>,
}

impl SmoothScroll {
    /// Starts gliding from `from` to `to`, replacing any running scroll.
    pub fn start(&mut self, now: Instant, from: f32, to: f32) {
        if (from - to).abs() < 0.5 {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::new(from, to, now, SCROLL_DURATION, Easing::EaseOut));
    }

    /// Offset to apply this frame. The last frame lands exactly on the target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let tween = self.tween?;
        if tween.is_finished(now) {
            self.tween = None;
            return Some(tween.target());
        }
        Some(tween.value_at(now))
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }

    /// Target of the running scroll.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.tween.map(|tween| tween.target())
    }

    /// Drops the running scroll, as when the user grabs the scrollbar.
    pub fn cancel(&mut self) {
        self.tween = None;
    }
}
