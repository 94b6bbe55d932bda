// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Tracks a horizontal press-drag-release and classifies it as a swipe.

/// Direction the pointer travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Dragged toward the left edge; shows the next page.
    Left,
    /// Dragged toward the right edge; shows the previous page.
    Right,
}

/// Manages swipe tracking state
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// X position where the gesture started
    pub start_x: Option<f32>,

    /// Last X position seen while moving
    pub last_x: Option<f32>,
}

impl SwipeState {
    /// Starts tracking a gesture
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.last_x = None;
    }

    /// Records pointer movement while tracking
    pub fn track(&mut self, x: f32) {
        if self.start_x.is_some() {
            self.last_x = Some(x);
        }
    }

    /// Whether a gesture is in progress
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the gesture, returning the swipe direction when the travel
    /// strictly exceeds `threshold`.
    ///
    /// A press released without any movement is never a swipe.
    pub fn finish(&mut self, threshold: f32) -> Option<SwipeDirection> {
        let start = self.start_x.take();
        let end = self.last_x.take();
        let delta = start? - end?;

        if delta.abs() <= threshold {
            None
        } else if delta > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }

    /// Drops any gesture in progress
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }
}
