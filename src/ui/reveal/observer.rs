// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection detection.
//!
//! Every watched element has a span in scroll coordinates. [`VisibilityObserver::check`]
//! compares each span against the visible part of the page and reports the
//! elements whose state flipped, in observation order.
//!
//! ```
//! use lexfolio::domain::ui::Threshold;
//! use lexfolio::ui::layout::{RootMargin, Span};
//! use lexfolio::ui::reveal::observer::{Mode, ObserverOptions, VisibilityObserver};
//!
//! let mut observer = VisibilityObserver::new(ObserverOptions {
//!     threshold: Threshold::new(0.5),
//!     margin: RootMargin::NONE,
//!     mode: Mode::OneShot,
//! });
//! observer.observe("counter", Span::new(900.0, 100.0));
//!
//! assert!(observer.check(Span::new(0.0, 800.0)).is_empty());
//! assert_eq!(observer.check(Span::new(300.0, 800.0)).len(), 1);
//! assert!(!observer.is_observing(&"counter"));
//! ```

use crate::domain::ui::Threshold;
use crate::ui::layout::{RootMargin, Span};

/// How an observer reacts to its elements leaving the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reveals on enter and hides on leave, forever.
    Toggle,
    /// Reveals once, then stops watching the element.
    OneShot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: Threshold,
    pub margin: RootMargin,
    pub mode: Mode,
}

impl ObserverOptions {
    #[must_use]
    pub fn one_shot(threshold: f32) -> Self {
        Self {
            threshold: Threshold::new(threshold),
            margin: RootMargin::NONE,
            mode: Mode::OneShot,
        }
    }

    #[must_use]
    pub fn toggle(threshold: f32) -> Self {
        Self {
            mode: Mode::Toggle,
            ..Self::one_shot(threshold)
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.margin = margin;
        self
    }
}

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    span: Span,
    revealed: bool,
    observing: bool,
}

/// State flip reported by [`VisibilityObserver::check`].
#[derive(Debug, Clone, PartialEq)]
pub struct Change<K> {
    pub key: K,
    pub revealed: bool,
    /// Position among the elements revealed by the same check. Used to
    /// derive stagger delays.
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    options: ObserverOptions,
    entries: Vec<Entry<K>>,
}

impl<K: Clone + PartialEq> VisibilityObserver<K> {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Starts watching `key`. Watching an element twice only moves its span.
    pub fn observe(&mut self, key: K, span: Span) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.span = span;
            return;
        }
        self.entries.push(Entry {
            key,
            span,
            revealed: false,
            observing: true,
        });
    }

    pub fn unobserve(&mut self, key: &K) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == *key) {
            entry.observing = false;
        }
    }

    /// Forgets every element.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.key == *key && entry.revealed)
    }

    #[must_use]
    pub fn is_observing(&self, key: &K) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.key == *key && entry.observing)
    }

    /// True while at least one element may still change state.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|entry| entry.observing)
    }

    /// Tests every watched element against `viewport` and returns the flips.
    pub fn check(&mut self, viewport: Span) -> Vec<Change<K>> {
        let ObserverOptions {
            threshold,
            margin,
            mode,
        } = self.options;
        let mut changes = Vec::new();
        let mut revealed_in_batch = 0;

        for entry in self.entries.iter_mut().filter(|entry| entry.observing) {
            let intersecting = threshold.is_met_by(entry.span.intersection_ratio(viewport, margin));
            if intersecting == entry.revealed {
                continue;
            }
            if mode == Mode::OneShot && !intersecting {
                continue;
            }

            entry.revealed = intersecting;
            if mode == Mode::OneShot {
                entry.observing = false;
            }

            let index = if intersecting {
                revealed_in_batch += 1;
                revealed_in_batch - 1
            } else {
                0
            };
            changes.push(Change {
                key: entry.key.clone(),
                revealed: intersecting,
                index,
            });
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(top: f32) -> Span {
        Span::new(top, 800.0)
    }

    #[test]
    fn toggle_mode_flips_both_ways() {
        let mut observer = VisibilityObserver::new(ObserverOptions::toggle(0.0));
        observer.observe(1, Span::new(1000.0, 200.0));

        assert!(observer.check(viewport(0.0)).is_empty());

        let shown = observer.check(viewport(500.0));
        assert_eq!(shown, vec![Change { key: 1, revealed: true, index: 0 }]);

        let hidden = observer.check(viewport(2000.0));
        assert_eq!(hidden, vec![Change { key: 1, revealed: false, index: 0 }]);
        assert!(observer.is_observing(&1));
    }

    #[test]
    fn one_shot_fires_once() {
        let mut observer = VisibilityObserver::new(ObserverOptions::one_shot(0.5));
        observer.observe("bar", Span::new(1000.0, 100.0));

        assert_eq!(observer.check(viewport(400.0)).len(), 1);
        assert!(observer.check(viewport(2000.0)).is_empty());
        assert!(observer.check(viewport(400.0)).is_empty());
        assert!(observer.is_revealed(&"bar"));
        assert!(!observer.has_pending());
    }

    #[test]
    fn threshold_requires_enough_coverage() {
        let mut observer = VisibilityObserver::new(ObserverOptions::one_shot(0.5));
        observer.observe(0, Span::new(750.0, 100.0));

        // 50px of 100px visible: exactly the threshold
        assert_eq!(observer.check(viewport(0.0)).len(), 1);

        let mut strict = VisibilityObserver::new(ObserverOptions::one_shot(0.5));
        strict.observe(0, Span::new(760.0, 100.0));
        assert!(strict.check(viewport(0.0)).is_empty());
    }

    #[test]
    fn bottom_margin_shrinks_viewport() {
        let options = ObserverOptions::one_shot(0.1).with_margin(RootMargin::bottom(-50.0));
        let mut observer = VisibilityObserver::new(options);
        observer.observe(0, Span::new(770.0, 100.0));

        // Visible area ends at 750 once the margin applies
        assert!(observer.check(viewport(0.0)).is_empty());
        assert_eq!(observer.check(viewport(100.0)).len(), 1);
    }

    #[test]
    fn stagger_index_counts_revealed_entries_in_order() {
        let mut observer = VisibilityObserver::new(ObserverOptions::one_shot(0.5));
        observer.observe('a', Span::new(100.0, 50.0));
        observer.observe('b', Span::new(5000.0, 50.0));
        observer.observe('c', Span::new(200.0, 50.0));
        observer.observe('d', Span::new(300.0, 50.0));

        let changes = observer.check(viewport(0.0));
        let indexed: Vec<(char, usize)> =
            changes.iter().map(|change| (change.key, change.index)).collect();
        assert_eq!(indexed, vec![('a', 0), ('c', 1), ('d', 2)]);
    }

    #[test]
    fn observing_twice_moves_span() {
        let mut observer = VisibilityObserver::new(ObserverOptions::toggle(0.5));
        observer.observe(7, Span::new(5000.0, 100.0));
        observer.observe(7, Span::new(100.0, 100.0));

        assert_eq!(observer.check(viewport(0.0)).len(), 1);
    }

    #[test]
    fn unobserved_elements_never_change() {
        let mut observer = VisibilityObserver::new(ObserverOptions::toggle(0.0));
        observer.observe(1, Span::new(100.0, 100.0));
        observer.unobserve(&1);

        assert!(observer.check(viewport(0.0)).is_empty());
        assert!(!observer.is_revealed(&1));
    }
}
