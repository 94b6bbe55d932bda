// SPDX-License-Identifier: MPL-2.0
//! Short scale pulses, as played by timeline markers when they light up.

use crate::config::MARKER_PULSE_MS;
use std::time::{Duration, Instant};

/// Scale applied at the peak of a pulse.
pub const PULSE_SCALE: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulse {
    until: Option<Instant>,
    active: bool,
}

impl Pulse {
    /// Lights the marker up and enlarges it for the pulse duration.
    pub fn trigger(&mut self, now: Instant) {
        self.active = true;
        self.until = Some(now + Duration::from_millis(MARKER_PULSE_MS));
    }

    /// Whether the marker has been lit.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn scale_at(&self, now: Instant) -> f32 {
        match self.until {
            Some(until) if now < until => PULSE_SCALE,
            _ => 1.0,
        }
    }

    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn pulse_grows_then_returns_to_rest() {
        let now = Instant::now();
        let mut pulse = Pulse::default();
        assert_abs_diff_eq!(pulse.scale_at(now), 1.0);

        pulse.trigger(now);
        assert!(pulse.is_active());
        assert_abs_diff_eq!(pulse.scale_at(now + Duration::from_millis(299)), PULSE_SCALE);
        assert_abs_diff_eq!(pulse.scale_at(now + Duration::from_millis(300)), 1.0);
        assert!(pulse.is_active());
    }
}
