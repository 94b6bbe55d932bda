// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation between two values.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A value moving from `from` to `to` over `duration`, starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// A tween already resting at `value`.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            start: None,
            duration: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start: Some(start),
            duration,
            easing,
        }
    }

    /// Restarts toward `to` from wherever the tween currently is.
    pub fn retarget(&mut self, now: Instant, to: f32, duration: Duration) {
        let from = self.value_at(now);
        *self = Self::new(from, to, now, duration, self.easing);
    }

    /// Jumps to `value` without animating.
    pub fn snap(&mut self, value: f32) {
        *self = Self::settled(value);
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(start) = self.start else {
            return self.to;
        };
        if self.duration.is_zero() {
            return self.to;
        }
        if now <= start {
            return self.from;
        }
        let elapsed = now.duration_since(start).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        match self.start {
            None => true,
            Some(start) => now >= start + self.duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_tween_interpolates() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 100.0, t0, Duration::from_millis(1000), Easing::Linear);

        assert_relative_eq!(tween.value_at(t0), 0.0);
        assert_relative_eq!(tween.value_at(t0 + Duration::from_millis(250)), 25.0, epsilon = 0.01);
        assert_relative_eq!(tween.value_at(t0 + Duration::from_secs(2)), 100.0);
        assert!(tween.is_finished(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn ease_out_moves_faster_early() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, t0, Duration::from_millis(100), Easing::EaseOut);
        assert!(tween.value_at(t0 + Duration::from_millis(50)) > 0.5);
    }

    #[test]
    fn retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut tween = Tween::new(0.0, 200.0, t0, Duration::from_millis(100), Easing::Linear);
        tween.retarget(t0 + Duration::from_millis(50), 0.0, Duration::from_millis(100));

        assert_relative_eq!(
            tween.value_at(t0 + Duration::from_millis(50)),
            100.0,
            epsilon = 0.01
        );
        assert_relative_eq!(tween.target(), 0.0);
    }

    #[test]
    fn settled_tween_is_finished() {
        let tween = Tween::settled(42.0);
        assert!(tween.is_finished(Instant::now()));
        assert_relative_eq!(tween.value_at(Instant::now()), 42.0);
    }
}
