// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debounce for bursty events such as window resizes.

use std::time::{Duration, Instant};

/// Keeps the latest value of a burst and releases it once the burst is quiet
/// for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Records a new value, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Returns the settled value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((due, _)) if *due <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value will be released.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(due, _)| *due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_releases_last_value_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(250));

        debouncer.trigger(t0, 800.0);
        debouncer.trigger(t0 + Duration::from_millis(100), 1200.0);

        assert_eq!(debouncer.poll(t0 + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.poll(t0 + Duration::from_millis(350)),
            Some(1200.0)
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn poll_without_trigger_is_none() {
        let mut debouncer: Debouncer<u32> = Debouncer::new(Duration::from_millis(10));
        assert_eq!(debouncer.poll(Instant::now()), None);
    }
}
