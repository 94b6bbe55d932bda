// SPDX-License-Identifier: MPL-2.0
//! Animated number counting up to its target.
//!
//! The count advances in fixed frames: every frame adds `target / frames`
//! and the displayed value is the floor of the running total, capped at the
//! target.

use crate::config::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Counting { started: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u32,
    phase: Phase,
    duration: Duration,
    frame: Duration,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self {
            target,
            phase: Phase::Idle,
            duration: Duration::from_millis(COUNTER_DURATION_MS),
            frame: Duration::from_millis(COUNTER_FRAME_MS),
        }
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Starts counting. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Counting { started: now };
        }
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn total_frames(&self) -> u64 {
        (self.duration.as_millis() / self.frame.as_millis().max(1)).max(1) as u64
    }

    fn frames_elapsed(&self, now: Instant) -> u64 {
        match self.phase {
            Phase::Idle => 0,
            Phase::Counting { started } => {
                (now.saturating_duration_since(started).as_millis()
                    / self.frame.as_millis().max(1)) as u64
            }
        }
    }

    /// Value shown at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> u32 {
        let frames = self.frames_elapsed(now);
        if frames >= self.total_frames() {
            return self.target;
        }
        let increment = f64::from(self.target) / self.total_frames() as f64;
        let current = (increment * frames as f64).floor();
        (current as u32).min(self.target)
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        self.has_started() && self.frames_elapsed(now) < self.total_frames()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn idle_counter_shows_zero() {
        let counter = CounterAnimation::new(500);
        assert_eq!(counter.value_at(Instant::now()), 0);
        assert!(!counter.is_running(Instant::now()));
    }

    #[test]
    fn counts_in_frames_up_to_target() {
        let now = Instant::now();
        let mut counter = CounterAnimation::new(500);
        counter.start(now);

        // 125 frames of 4 each
        assert_eq!(counter.value_at(now), 0);
        assert_eq!(counter.value_at(now + ms(16)), 4);
        assert_eq!(counter.value_at(now + ms(1000)), 248);
        assert_eq!(counter.value_at(now + ms(2000)), 500);
        assert_eq!(counter.value_at(now + ms(9000)), 500);
        assert!(!counter.is_running(now + ms(2000)));
    }

    #[test]
    fn values_never_decrease() {
        let now = Instant::now();
        let mut counter = CounterAnimation::new(137);
        counter.start(now);

        let mut previous = 0;
        for step in 0..140 {
            let value = counter.value_at(now + ms(step * 16));
            assert!(value >= previous);
            assert!(value <= 137);
            previous = value;
        }
        assert_eq!(previous, 137);
    }

    #[test]
    fn restart_is_ignored() {
        let now = Instant::now();
        let mut counter = CounterAnimation::new(100);
        counter.start(now);
        counter.start(now + ms(1000));

        assert_eq!(counter.value_at(now + ms(2000)), 100);
    }
}
