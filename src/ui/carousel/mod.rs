// SPDX-License-Identifier: MPL-2.0
//! Specialties carousel.
//!
//! The engine owns the slide index, the responsive page size, the animated
//! track offset, and the single autoplay deadline. Navigation never wraps
//! except when autoplay runs past the last page.
//!
//! ```
//! use lexfolio::ui::carousel::{Carousel, CarouselSettings};
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let mut carousel = Carousel::new(7, 1280.0, now, CarouselSettings::default());
//! assert_eq!(carousel.max_index(), 2);
//!
//! carousel.go_to_slide(9, now);
//! assert_eq!(carousel.current_index(), 2);
//! ```

pub mod view;

use crate::config::{CarouselConfig, DEFAULT_CARD_GAP_PX};
use crate::domain::ui::{is_mobile_width, CardsPerView};
use crate::ui::state::swipe::{SwipeDirection, SwipeState};
use crate::ui::state::tween::Tween;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Widest the carousel track grows, whatever the window size.
pub const MAX_TRACK_WIDTH: f32 = 1200.0;

/// Horizontal padding around the track on each side.
const TRACK_PADDING: f32 = 40.0;
const TRACK_PADDING_MOBILE: f32 = 16.0;

/// Duration of the slide transition.
const SLIDE_TRANSITION: Duration = Duration::from_millis(500);

/// Timing and gesture parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub autoplay_interval: Duration,
    pub resume_delay: Duration,
    pub swipe_threshold: f32,
    pub gap: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            autoplay_interval: config.autoplay_interval(),
            resume_delay: config.resume_delay(),
            swipe_threshold: config.swipe_threshold(),
            gap: DEFAULT_CARD_GAP_PX,
        }
    }
}

/// Autoplay timer. Each variant holds at most one deadline, so replacing the
/// variant is the only way a pending advance is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Autoplay {
    Stopped,
    Running { next_advance: Instant },
    Resuming { resume_at: Instant },
}

impl Autoplay {
    #[must_use]
    pub fn deadline(self) -> Option<Instant> {
        match self {
            Autoplay::Stopped => None,
            Autoplay::Running { next_advance } => Some(next_advance),
            Autoplay::Resuming { resume_at } => Some(resume_at),
        }
    }
}

/// Width available to the track inside a window of `viewport_width`.
#[must_use]
pub fn track_width(viewport_width: f32) -> f32 {
    let padding = if is_mobile_width(viewport_width) {
        TRACK_PADDING_MOBILE
    } else {
        TRACK_PADDING
    };
    (viewport_width.min(MAX_TRACK_WIDTH) - 2.0 * padding).max(0.0)
}

#[derive(Debug, Clone)]
pub struct Carousel {
    total_cards: usize,
    current_index: usize,
    cards_per_view: CardsPerView,
    slide_width: f32,
    settings: CarouselSettings,
    autoplay: Autoplay,
    hovered: bool,
    swipe: SwipeState,
    pointer_x: Option<f32>,
    offset: Tween,
}

/// Messages emitted by the carousel view.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    PointerEntered,
    PointerExited,
    PointerMoved(f32),
    PointerPressed,
    PointerReleased,
    /// The call to action of a card was pressed.
    Consult(usize),
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The visible page changed.
    Navigated(usize),
    /// The visitor asked for a consultation about a card.
    ConsultRequested(usize),
}

impl Carousel {
    /// Builds the carousel and starts autoplay. Zero cards make it inert.
    #[must_use]
    pub fn new(
        total_cards: usize,
        viewport_width: f32,
        now: Instant,
        settings: CarouselSettings,
    ) -> Self {
        let cards_per_view = CardsPerView::from_viewport_width(viewport_width);
        let mut carousel = Self {
            total_cards,
            current_index: 0,
            cards_per_view,
            slide_width: slide_width_for(track_width(viewport_width), cards_per_view, settings.gap),
            settings,
            autoplay: Autoplay::Stopped,
            hovered: false,
            swipe: SwipeState::default(),
            pointer_x: None,
            offset: Tween::settled(0.0),
        };
        carousel.start_auto_slide(now);
        carousel
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn cards_per_view(&self) -> CardsPerView {
        self.cards_per_view
    }

    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.settings.gap
    }

    #[must_use]
    pub fn autoplay(&self) -> Autoplay {
        self.autoplay
    }

    /// Number of pages, which is also the number of dots.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.cards_per_view.pages_for(self.total_cards)
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    #[must_use]
    pub fn prev_enabled(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn next_enabled(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Dot states as `(page, active)`.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.page_count()).map(move |page| (page, page == self.current_index))
    }

    /// Cards shown on the current page.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let per_view = self.cards_per_view.count();
        let first = (self.current_index * per_view).min(self.total_cards);
        first..(first + per_view).min(self.total_cards)
    }

    /// Resting horizontal translation of the track for the current page.
    #[must_use]
    pub fn translate_x(&self) -> f32 {
        -(self.current_index as f32
            * (self.slide_width + self.settings.gap)
            * self.cards_per_view.count() as f32)
    }

    /// Translation at `now`, following the slide transition.
    #[must_use]
    pub fn translate_x_at(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.offset.is_finished(now)
    }

    /// Moves to page `index`, clamped into `[0, max_index]`.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        self.current_index = index.min(self.max_index());
        let target = self.translate_x();
        self.offset.retarget(now, target, SLIDE_TRANSITION);
    }

    /// Steps forward; returns false at the last page.
    pub fn next_slide(&mut self, now: Instant) -> bool {
        if self.current_index < self.max_index() {
            self.go_to_slide(self.current_index + 1, now);
            true
        } else {
            false
        }
    }

    /// Steps back; returns false at the first page.
    pub fn prev_slide(&mut self, now: Instant) -> bool {
        if self.current_index > 0 {
            self.go_to_slide(self.current_index - 1, now);
            true
        } else {
            false
        }
    }

    /// Schedules the next autoplay advance, replacing any pending deadline.
    pub fn start_auto_slide(&mut self, now: Instant) {
        if self.total_cards == 0 {
            self.autoplay = Autoplay::Stopped;
            return;
        }
        self.autoplay = Autoplay::Running {
            next_advance: now + self.settings.autoplay_interval,
        };
    }

    /// Schedules the advance one interval after `scheduled`, so late ticks
    /// do not push every later advance back. Falls back to `now` when that
    /// instant has already passed.
    fn rearm_from(&mut self, scheduled: Instant, now: Instant) {
        let next_advance = scheduled + self.settings.autoplay_interval;
        if next_advance > now {
            self.autoplay = Autoplay::Running { next_advance };
        } else {
            self.start_auto_slide(now);
        }
    }

    pub fn stop_auto_slide(&mut self) {
        self.autoplay = Autoplay::Stopped;
    }

    /// Stops autoplay and schedules its restart after the grace delay.
    fn pause_for_manual_navigation(&mut self, now: Instant) {
        if self.total_cards == 0 {
            return;
        }
        self.autoplay = Autoplay::Resuming {
            resume_at: now + self.settings.resume_delay,
        };
    }

    /// Recomputes the page size for a new viewport width and keeps the index
    /// in range. The track jumps to its new resting place.
    pub fn relayout(&mut self, viewport_width: f32) {
        self.cards_per_view = CardsPerView::from_viewport_width(viewport_width);
        self.slide_width = slide_width_for(
            track_width(viewport_width),
            self.cards_per_view,
            self.settings.gap,
        );
        self.current_index = self.current_index.min(self.max_index());
        let target = self.translate_x();
        self.offset.snap(target);
    }

    /// Releases the autoplay deadline once it has passed.
    ///
    /// Returns true when the page changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.autoplay {
            Autoplay::Running { next_advance } if now >= next_advance => {
                let target = if self.current_index >= self.max_index() {
                    0
                } else {
                    self.current_index + 1
                };
                let changed = target != self.current_index;
                self.go_to_slide(target, now);
                self.rearm_from(next_advance, now);
                changed
            }
            Autoplay::Resuming { resume_at } if now >= resume_at => {
                if self.hovered {
                    self.stop_auto_slide();
                } else {
                    self.rearm_from(resume_at, now);
                }
                false
            }
            _ => false,
        }
    }

    /// Earliest instant at which [`Carousel::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        let before = self.current_index;
        match message {
            Message::Previous => {
                self.prev_slide(now);
                self.pause_for_manual_navigation(now);
            }
            Message::Next => {
                self.next_slide(now);
                self.pause_for_manual_navigation(now);
            }
            Message::GoTo(index) => {
                self.go_to_slide(index, now);
                self.pause_for_manual_navigation(now);
            }
            Message::PointerEntered => {
                self.hovered = true;
                self.stop_auto_slide();
            }
            Message::PointerExited => {
                self.hovered = false;
                self.pointer_x = None;
                if self.swipe.is_tracking() {
                    self.finish_swipe(now);
                } else {
                    self.start_auto_slide(now);
                }
            }
            Message::PointerMoved(x) => {
                self.pointer_x = Some(x);
                self.swipe.track(x);
            }
            Message::PointerPressed => {
                if let Some(x) = self.pointer_x {
                    self.swipe.start(x);
                    self.stop_auto_slide();
                }
            }
            Message::PointerReleased => {
                if self.swipe.is_tracking() {
                    self.finish_swipe(now);
                }
            }
            Message::Consult(card) => {
                return if card < self.total_cards {
                    Event::ConsultRequested(card)
                } else {
                    Event::None
                };
            }
        }

        if self.current_index != before {
            Event::Navigated(self.current_index)
        } else {
            Event::None
        }
    }

    fn finish_swipe(&mut self, now: Instant) {
        match self.swipe.finish(self.settings.swipe_threshold) {
            Some(SwipeDirection::Left) => {
                self.next_slide(now);
            }
            Some(SwipeDirection::Right) => {
                self.prev_slide(now);
            }
            None => {}
        }
        self.pause_for_manual_navigation(now);
    }
}

fn slide_width_for(track_width: f32, cards_per_view: CardsPerView, gap: f32) -> f32 {
    let count = cards_per_view.count() as f32;
    ((track_width - gap * (count - 1.0)) / count).max(0.0)
}
