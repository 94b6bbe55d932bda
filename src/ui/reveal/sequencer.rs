// SPDX-License-Identifier: MPL-2.0
//! Delay-staggered reveals.
//!
//! An item queued with stagger index `i` becomes visible at
//! `now + base + i × step`. Once released it stays revealed and remembers
//! when, so views can fade it in.

use crate::ui::state::schedule::Schedule;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Length of the slide-in transition of a revealed item.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// Distance a revealed item travels upward while fading in.
pub const FADE_OFFSET_PX: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct Sequencer<K> {
    pending: Schedule<K>,
    revealed: HashMap<K, Instant>,
}

impl<K> Default for Sequencer<K> {
    fn default() -> Self {
        Self {
            pending: Schedule::default(),
            revealed: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Sequencer<K> {
    /// Queues `key` at `base + index × step` from `now`.
    ///
    /// Items already revealed or already queued are left alone.
    pub fn stagger(&mut self, now: Instant, key: K, index: usize, base: Duration, step: Duration) {
        let delay = base + step * u32::try_from(index).unwrap_or(u32::MAX);
        self.reveal_after(now, key, delay);
    }

    /// Queues `key` after a fixed delay.
    pub fn reveal_after(&mut self, now: Instant, key: K, delay: Duration) {
        if self.revealed.contains_key(&key) {
            return;
        }
        if !self.pending.any(|queued| *queued == key) {
            self.pending.after(now, delay, key);
        }
    }

    /// Reveals `key` right away.
    pub fn reveal_now(&mut self, now: Instant, key: K) {
        self.pending.retain(|queued| *queued != key);
        self.revealed.entry(key).or_insert(now);
    }

    /// Hides `key` again and cancels any pending reveal.
    pub fn hide(&mut self, key: &K) {
        self.pending.retain(|queued| queued != key);
        self.revealed.remove(key);
    }

    /// Releases every item whose delay has elapsed, earliest first.
    pub fn tick(&mut self, now: Instant) -> Vec<K> {
        let due = self.pending.drain_due(now);
        for key in &due {
            self.revealed.entry(key.clone()).or_insert(now);
        }
        due
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains_key(key)
    }

    #[must_use]
    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.any(|queued| queued == key)
    }

    /// Fade-in progress of `key` in `[0, 1]`; zero while hidden.
    #[must_use]
    pub fn progress(&self, key: &K, now: Instant) -> f32 {
        self.revealed.get(key).map_or(0.0, |at| {
            let elapsed = now.saturating_duration_since(*at).as_secs_f32();
            (elapsed / FADE_DURATION.as_secs_f32()).min(1.0)
        })
    }

    /// Remaining upward offset of `key` while it slides in.
    #[must_use]
    pub fn slide_offset(&self, key: &K, now: Instant) -> f32 {
        FADE_OFFSET_PX * (1.0 - self.progress(key, now))
    }

    /// True while something is queued or still fading in.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        !self.pending.is_empty()
            || self
                .revealed
                .values()
                .any(|at| now.saturating_duration_since(*at) < FADE_DURATION)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_due()
    }

    /// Forgets every item.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.revealed.clear();
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
    fn stagger_spaces_reveals_by_step() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        for (index, key) in ["a", "b", "c"].into_iter().enumerate() {
            sequencer.stagger(now, key, index, Duration::ZERO, ms(200));
        }

        assert_eq!(sequencer.tick(now), vec!["a"]);
        assert!(sequencer.tick(now + ms(199)).is_empty());
        assert_eq!(sequencer.tick(now + ms(200)), vec!["b"]);
        assert_eq!(sequencer.tick(now + ms(400)), vec!["c"]);
        assert!(!sequencer.is_active(now + ms(900)));
    }

    #[test]
    fn base_delay_is_added() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        sequencer.stagger(now, 1, 2, ms(150), ms(100));

        assert!(sequencer.tick(now + ms(349)).is_empty());
        assert_eq!(sequencer.tick(now + ms(350)), vec![1]);
    }

    #[test]
    fn revealed_items_are_not_requeued() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        sequencer.reveal_now(now, 1);
        sequencer.reveal_after(now, 1, ms(100));

        assert!(sequencer.tick(now + ms(100)).is_empty());
        assert!(sequencer.is_revealed(&1));
    }

    #[test]
    fn queued_items_keep_first_deadline() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        sequencer.reveal_after(now, 1, ms(100));
        sequencer.reveal_after(now, 1, ms(500));

        assert!(sequencer.is_pending(&1));
        assert_eq!(sequencer.next_deadline(), Some(now + ms(100)));
    }

    #[test]
    fn progress_ramps_over_fade() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        sequencer.reveal_now(now, 'x');

        assert_abs_diff_eq!(sequencer.progress(&'x', now), 0.0);
        assert_abs_diff_eq!(sequencer.progress(&'x', now + ms(250)), 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(sequencer.slide_offset(&'x', now + ms(500)), 0.0);
        assert_abs_diff_eq!(sequencer.progress(&'y', now), 0.0);
    }

    #[test]
    fn hide_cancels_pending_reveal() {
        let now = Instant::now();
        let mut sequencer = Sequencer::default();
        sequencer.reveal_after(now, 1, ms(100));
        sequencer.hide(&1);

        assert!(sequencer.tick(now + ms(200)).is_empty());
        assert!(!sequencer.is_revealed(&1));
    }
}
