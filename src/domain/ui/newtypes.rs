// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! Type-safe wrappers for UI values, ensuring they are always within valid ranges.

// =============================================================================
// Breakpoints
// =============================================================================

/// Viewport width breakpoints (logical pixels).
pub mod breakpoints {
    /// Widest viewport laid out as a phone.
    pub const MOBILE_MAX: f32 = 768.0;
    /// Widest viewport laid out as a tablet.
    pub const TABLET_MAX: f32 = 1024.0;
}

// =============================================================================
// CardsPerView
// =============================================================================

/// Number of carousel cards shown side by side.
///
/// ```
/// use lexfolio::domain::ui::CardsPerView;
///
/// assert_eq!(CardsPerView::from_viewport_width(700.0), CardsPerView::One);
/// assert_eq!(CardsPerView::from_viewport_width(1024.0), CardsPerView::Two);
/// assert_eq!(CardsPerView::from_viewport_width(1440.0).count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardsPerView {
    One,
    Two,
    #[default]
    Three,
}

impl CardsPerView {
    /// Picks the layout for a viewport width.
    #[must_use]
    pub fn from_viewport_width(width: f32) -> Self {
        if width <= breakpoints::MOBILE_MAX {
            Self::One
        } else if width <= breakpoints::TABLET_MAX {
            Self::Two
        } else {
            Self::Three
        }
    }

    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Number of pages needed to show `total` cards.
    #[must_use]
    pub fn pages_for(self, total: usize) -> usize {
        total.div_ceil(self.count())
    }
}

/// Returns true when the width is laid out as a phone.
#[must_use]
pub fn is_mobile_width(width: f32) -> bool {
    width <= breakpoints::MOBILE_MAX
}

// =============================================================================
// Threshold
// =============================================================================

/// Fraction of an element that must be visible, clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Threshold(f32);

impl Threshold {
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether a visibility ratio counts as intersecting.
    ///
    /// A ratio of zero never intersects, even for a zero threshold.
    #[must_use]
    pub fn is_met_by(self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.0
    }
}

// =============================================================================
// Percent
// =============================================================================

/// A progress value in `0.0..=100.0`, used for bar widths.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f32);

impl Percent {
    pub const ZERO: Self = Self(0.0);
    pub const FULL: Self = Self(100.0);

    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the percentage as a `0.0..=1.0` fraction.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(CardsPerView::from_viewport_width(768.0), CardsPerView::One);
        assert_eq!(CardsPerView::from_viewport_width(768.5), CardsPerView::Two);
        assert_eq!(CardsPerView::from_viewport_width(1024.0), CardsPerView::Two);
        assert_eq!(CardsPerView::from_viewport_width(1025.0), CardsPerView::Three);
    }

    #[test]
    fn pages_round_up() {
        assert_eq!(CardsPerView::Three.pages_for(7), 3);
        assert_eq!(CardsPerView::Two.pages_for(6), 3);
        assert_eq!(CardsPerView::One.pages_for(0), 0);
    }

    #[test]
    fn threshold_requires_positive_ratio() {
        assert!(!Threshold::new(0.0).is_met_by(0.0));
        assert!(Threshold::new(0.0).is_met_by(0.01));
        assert!(Threshold::new(0.5).is_met_by(0.5));
        assert!(!Threshold::new(0.5).is_met_by(0.49));
    }

    #[test]
    fn threshold_and_percent_clamp() {
        assert_eq!(Threshold::new(2.0).value(), 1.0);
        assert_eq!(Threshold::new(f32::NAN).value(), 0.0);
        assert_eq!(Percent::new(140.0), Percent::FULL);
        assert_eq!(Percent::new(-3.0), Percent::ZERO);
        assert_eq!(Percent::new(45.0).as_fraction(), 0.45);
    }

    #[test]
    fn mobile_width_matches_one_card_layout() {
        assert!(is_mobile_width(768.0));
        assert!(!is_mobile_width(769.0));
    }
}
