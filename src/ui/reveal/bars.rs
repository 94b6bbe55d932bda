// SPDX-License-Identifier: MPL-2.0
//! Growing progress bars.
//!
//! Distribution bars collapse to zero when they come into view and grow to
//! their target after a short delay. The timeline progress line is the same
//! animation with a full target and no delay.

use crate::config::{BAR_GROW_DELAY_MS, BAR_GROW_DURATION_MS};
use crate::domain::ui::Percent;
use crate::ui::state::tween::{Easing, Tween};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGrowth {
    target: Percent,
    width: Tween,
    delay: Duration,
    started: bool,
}

impl BarGrowth {
    /// A bar already drawn at its target width, as before any animation.
    #[must_use]
    pub fn new(target: Percent) -> Self {
        Self {
            target,
            width: Tween::settled(target.value()),
            delay: Duration::from_millis(BAR_GROW_DELAY_MS),
            started: false,
        }
    }

    /// The timeline line: starts empty and fills up with no delay.
    #[must_use]
    pub fn timeline() -> Self {
        Self {
            target: Percent::FULL,
            width: Tween::settled(0.0),
            delay: Duration::ZERO,
            started: false,
        }
    }

    #[must_use]
    pub fn target(&self) -> Percent {
        self.target
    }

    /// Resets the width to zero and schedules growth to the target.
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.width = Tween::new(
            0.0,
            self.target.value(),
            now + self.delay,
            Duration::from_millis(BAR_GROW_DURATION_MS),
            Easing::EaseOut,
        );
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Width at `now`.
    #[must_use]
    pub fn width_at(&self, now: Instant) -> Percent {
        Percent::new(self.width.value_at(now))
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started && !self.width.is_finished(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn bar_resets_then_grows_after_delay() {
        let now = Instant::now();
        let mut bar = BarGrowth::new(Percent::new(85.0));
        assert_abs_diff_eq!(bar.width_at(now).value(), 85.0);

        bar.start(now);
        assert_abs_diff_eq!(bar.width_at(now).value(), 0.0);
        assert_abs_diff_eq!(bar.width_at(now + ms(200)).value(), 0.0);
        assert!(bar.width_at(now + ms(900)).value() > 0.0);
        assert_abs_diff_eq!(bar.width_at(now + ms(1700)).value(), 85.0);
        assert!(!bar.is_animating(now + ms(1700)));
    }

    #[test]
    fn second_start_is_ignored() {
        let now = Instant::now();
        let mut bar = BarGrowth::new(Percent::new(40.0));
        bar.start(now);
        bar.start(now + ms(1000));

        assert_abs_diff_eq!(bar.width_at(now + ms(1700)).value(), 40.0);
    }

    #[test]
    fn timeline_fills_to_full_width() {
        let now = Instant::now();
        let mut line = BarGrowth::timeline();
        assert_abs_diff_eq!(line.width_at(now).value(), 0.0);

        line.start(now);
        assert!(line.is_animating(now + ms(10)));
        assert_abs_diff_eq!(line.width_at(now + ms(1500)).value(), 100.0);
    }
}
