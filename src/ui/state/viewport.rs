// SPDX-License-Identifier: MPL-2.0
//! Page viewport state.
//!
//! Tracks the vertical scroll offset and the visible size of the page
//! scrollable, as reported by its `on_scroll` callback.

use crate::ui::layout::Span;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Previous scroll offset (for delta tracking)
    pub previous_offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl ViewportState {
    /// Records a scroll report. Returns true when the offset moved.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.previous_offset = self.offset;
        self.offset = offset;
        self.bounds = Some(bounds);
        self.previous_offset.y != self.offset.y
    }

    /// Sets the visible height before the scrollable has reported anything.
    pub fn assume_height(&mut self, width: f32, height: f32) {
        if self.bounds.is_none() {
            self.bounds = Some(Rectangle::new(
                iced::Point::ORIGIN,
                iced::Size::new(width, height),
            ));
        }
    }

    /// Back to the top, as after a screen switch.
    pub fn reset_offset(&mut self) {
        self.previous_offset = self.offset;
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Records an offset applied by a programmatic scroll.
    pub fn set_scroll_y(&mut self, y: f32) {
        self.previous_offset = self.offset;
        self.offset.y = y;
    }

    /// Visible height, zero before the first report.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bounds.map_or(0.0, |bounds| bounds.height)
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.offset.y
    }

    /// Visible part of the page in scroll coordinates.
    #[must_use]
    pub fn visible_span(&self) -> Span {
        Span::new(self.offset.y, self.height())
    }

    /// True once the page has scrolled further than `threshold`.
    #[must_use]
    pub fn scrolled_past(&self, threshold: f32) -> bool {
        self.offset.y > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn bounds(height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(1280.0, height))
    }

    #[test]
    fn default_viewport_has_zero_offset() {
        let state = ViewportState::default();
        assert_abs_diff_eq!(state.offset.y, 0.0);
        assert!(state.bounds.is_none());
    }

    #[test]
    fn update_tracks_previous_offset() {
        let mut state = ViewportState::default();

        assert!(state.update(bounds(800.0), AbsoluteOffset { x: 0.0, y: 50.0 }));
        assert!(!state.update(bounds(800.0), AbsoluteOffset { x: 0.0, y: 50.0 }));
        assert_abs_diff_eq!(state.previous_offset.y, 50.0);
    }

    #[test]
    fn visible_span_follows_scroll() {
        let mut state = ViewportState::default();
        state.update(bounds(700.0), AbsoluteOffset { x: 0.0, y: 300.0 });

        let span = state.visible_span();
        assert_abs_diff_eq!(span.top, 300.0);
        assert_abs_diff_eq!(span.bottom(), 1000.0);
    }

    #[test]
    fn scrolled_past_is_strict() {
        let mut state = ViewportState::default();
        state.update(bounds(700.0), AbsoluteOffset { x: 0.0, y: 100.0 });
        assert!(!state.scrolled_past(100.0));

        state.update(bounds(700.0), AbsoluteOffset { x: 0.0, y: 101.0 });
        assert!(state.scrolled_past(100.0));
    }

    #[test]
    fn assumed_height_does_not_override_report() {
        let mut state = ViewportState::default();
        state.update(bounds(500.0), AbsoluteOffset::default());
        state.assume_height(1280.0, 900.0);
        assert_abs_diff_eq!(state.visible_span().height, 500.0);
    }
}
