// SPDX-License-Identifier: MPL-2.0
//! Deadline queue for delayed continuations.
//!
//! Engines never spawn timers. They push a value with its due instant and
//! release it from the periodic tick once the instant has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Schedule<T> {
    entries: Vec<(Instant, T)>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Schedule<T> {
    /// Queues `item` for release at `due`.
    pub fn at(&mut self, due: Instant, item: T) {
        self.entries.push((due, item));
    }

    /// Queues `item` for release `delay` after `now`.
    pub fn after(&mut self, now: Instant, delay: Duration, item: T) {
        self.at(now + delay, item);
    }

    /// Removes and returns every item due at `now`, earliest first.
    ///
    /// Items sharing a due instant keep their insertion order.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|(at, _)| *at <= now);
        self.entries = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, item)| item).collect()
    }

    /// Drops queued items that fail the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.entries.retain(|(_, item)| keep(item));
    }

    /// True when a queued item matches the predicate.
    #[must_use]
    pub fn any(&self, mut matches: impl FnMut(&T) -> bool) -> bool {
        self.entries.iter().any(|(_, item)| matches(item))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|(at, _)| *at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_only_due_items_in_time_order() {
        let t0 = Instant::now();
        let mut schedule = Schedule::default();
        schedule.after(t0, Duration::from_millis(300), "late");
        schedule.after(t0, Duration::from_millis(100), "early");
        schedule.after(t0, Duration::from_millis(900), "pending");

        assert!(schedule.drain_due(t0).is_empty());
        assert_eq!(
            schedule.drain_due(t0 + Duration::from_millis(300)),
            vec!["early", "late"]
        );
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.next_due(), Some(t0 + Duration::from_millis(900)));
    }

    #[test]
    fn same_deadline_keeps_insertion_order() {
        let t0 = Instant::now();
        let mut schedule = Schedule::default();
        schedule.at(t0, 1);
        schedule.at(t0, 2);
        schedule.at(t0, 3);

        assert_eq!(schedule.drain_due(t0), vec![1, 2, 3]);
        assert!(schedule.is_empty());
    }

    #[test]
    fn retain_cancels_matching_items() {
        let t0 = Instant::now();
        let mut schedule = Schedule::default();
        schedule.at(t0, 1);
        schedule.at(t0, 2);
        schedule.retain(|item| *item != 1);

        assert_eq!(schedule.drain_due(t0), vec![2]);
    }
}
