// SPDX-License-Identifier: MPL-2.0
//! Blog screen: the article accordion on its own scrolling page.
//!
//! Panels slide in as they come into view, a deep link fragment such as
//! `open=2` opens one shortly after the screen appears, and opening a panel
//! scrolls it below the navigation bar once its height settled.

pub mod view;

use crate::config::{Config, ACCORDION_ITEM_STAGGER_MS, ANCHOR_SCROLL_MARGIN_PX};
use crate::content::SiteContent;
use crate::ui::accordion::{self, view::measure_body, Accordion, AccordionSettings, PanelSpec};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::layout::{anchor_offset, RootMargin, Span, NAV_HEIGHT};
use crate::ui::reveal::{ObserverOptions, Sequencer, VisibilityObserver};
use crate::ui::state::{SmoothScroll, ViewportState};
use iced::widget::scrollable;
use iced::Size;
use std::time::{Duration, Instant};

/// Id of the page scrollable.
pub const SCROLLABLE_ID: &str = "blog-page";

/// Height of the title block above the accordion.
pub const HEADER_BLOCK_HEIGHT: f32 = 160.0;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(scrollable::Viewport),
    Accordion(accordion::Message),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo(f32),
    /// The visitor wants a consultation about this article.
    Consult(usize),
}

#[derive(Debug, Clone)]
pub struct State {
    accordion: Accordion,
    viewport: ViewportState,
    scroll: SmoothScroll,
    entrance_watch: VisibilityObserver<usize>,
    entrance: Sequencer<usize>,
}

impl State {
    #[must_use]
    pub fn new(content: &SiteContent, config: &Config, size: Size, now: Instant) -> Self {
        let panels = content
            .articles
            .iter()
            .map(|article| {
                PanelSpec::new(
                    article.category.clone(),
                    measure_body(article, panel_width(size.width)),
                )
            })
            .collect();

        let mut viewport = ViewportState::default();
        viewport.assume_height(size.width, size.height);

        let mut state = Self {
            accordion: Accordion::new(panels, AccordionSettings::from(&config.accordion)),
            viewport,
            scroll: SmoothScroll::default(),
            entrance_watch: VisibilityObserver::new(
                ObserverOptions::one_shot(0.1).with_margin(RootMargin::bottom(-50.0)),
            ),
            entrance: Sequencer::default(),
        };
        if !config.reveal.animations_enabled() {
            for index in 0..state.accordion.panel_count() {
                state.entrance.reveal_now(now, index);
            }
        }
        state.observe_panels(now);
        state
    }

    /// Schedules the panel named by a `#open=N` style fragment.
    pub fn apply_deep_link(&mut self, fragment: &str, now: Instant) -> Option<usize> {
        self.accordion.apply_deep_link(fragment, now)
    }

    /// Spans of the displayed panels, using their resting heights.
    #[must_use]
    pub fn panel_spans(&self) -> Vec<(usize, Span)> {
        let mut top = NAV_HEIGHT + HEADER_BLOCK_HEIGHT + view::FILTER_ROW_HEIGHT;
        let mut spans = Vec::new();
        for index in 0..self.accordion.panel_count() {
            if !self.accordion.is_displayed(index) {
                continue;
            }
            let body = if self.accordion.is_open(index) {
                self.accordion.content_height(index)
            } else {
                0.0
            };
            let height = accordion::view::HEADER_HEIGHT + body;
            spans.push((index, Span::new(top, height)));
            top += height + accordion::view::PANEL_SPACING;
        }
        spans
    }

    fn total_height(&self) -> f32 {
        self.panel_spans()
            .last()
            .map_or(NAV_HEIGHT + HEADER_BLOCK_HEIGHT, |(_, span)| span.bottom())
            + spacing::XXL
    }

    fn observe_panels(&mut self, now: Instant) {
        for (index, span) in self.panel_spans() {
            self.entrance_watch.observe(index, span);
        }
        self.check_visibility(now);
    }

    fn check_visibility(&mut self, now: Instant) {
        for change in self
            .entrance_watch
            .check(self.viewport.visible_span())
        {
            self.entrance.stagger(
                now,
                change.key,
                change.index,
                Duration::ZERO,
                Duration::from_millis(ACCORDION_ITEM_STAGGER_MS),
            );
        }
    }

    /// Applies a (debounced) window size.
    pub fn relayout(&mut self, content: &SiteContent, size: Size, now: Instant) {
        let heights: Vec<f32> = content
            .articles
            .iter()
            .map(|article| measure_body(article, panel_width(size.width)))
            .collect();
        self.accordion.remeasure(&heights);
        self.observe_panels(now);
    }

    fn scroll_to_panel(&mut self, index: usize, now: Instant) {
        let Some((_, span)) = self
            .panel_spans()
            .into_iter()
            .find(|(candidate, _)| *candidate == index)
        else {
            return;
        };
        let max = (self.total_height() - self.viewport.height()).max(0.0);
        let target = anchor_offset(span.top, ANCHOR_SCROLL_MARGIN_PX).min(max);
        self.scroll.start(now, self.viewport.scroll_y(), target);
    }

    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.entrance.tick(now);

        for effect in self.accordion.tick(now) {
            match effect {
                accordion::Effect::ScrollToPanel(index) => self.scroll_to_panel(index, now),
            }
        }

        if let Some(y) = self.scroll.tick(now) {
            self.viewport.set_scroll_y(y);
            self.check_visibility(now);
            effects.push(Effect::ScrollTo(y));
        }
        effects
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.is_active() || self.accordion.is_animating(now) || self.entrance.is_active(now)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.accordion.next_deadline(), self.entrance.next_deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        match message {
            Message::Scrolled(viewport) => {
                self.viewport
                    .update(viewport.bounds(), viewport.absolute_offset());
                self.check_visibility(now);
                Vec::new()
            }
            Message::Accordion(message) => match self.accordion.update(message, now) {
                accordion::Event::ConsultRequested(index) => vec![Effect::Consult(index)],
                accordion::Event::Toggled { .. } | accordion::Event::CategoryChanged => {
                    self.observe_panels(now);
                    Vec::new()
                }
                accordion::Event::None => Vec::new(),
            },
        }
    }

    /// Back to the top after switching screens.
    pub fn reset_scroll(&mut self, now: Instant) {
        self.scroll.cancel();
        self.viewport.reset_offset();
        self.check_visibility(now);
    }

    #[must_use]
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    #[must_use]
    pub fn entrance(&self) -> &Sequencer<usize> {
        &self.entrance
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y()
    }
}

/// Width available to an article body.
fn panel_width(window_width: f32) -> f32 {
    window_width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * spacing::LG
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn blog() -> (State, SiteContent, Instant) {
        let content = SiteContent::bundled().unwrap_or_default();
        let now = Instant::now();
        let state = State::new(
            &content,
            &Config::default(),
            Size::new(1280.0, 800.0),
            now,
        );
        (state, content, now)
    }

    #[test]
    fn visible_panels_enter_staggered() {
        let (mut state, _content, now) = blog();
        state.tick(now);
        assert!(state.entrance().is_revealed(&0));
        assert!(!state.entrance().is_revealed(&1));
        state.tick(now + ms(100));
        assert!(state.entrance().is_revealed(&1));
    }

    #[test]
    fn entrance_observer_shrinks_the_bottom_edge() {
        let (state, _content, _now) = blog();
        assert_eq!(
            state.entrance_watch.options(),
            ObserverOptions::one_shot(0.1).with_margin(RootMargin::bottom(-50.0))
        );
    }

    #[test]
    fn panel_just_above_the_fold_waits() {
        let (reference, content, _) = blog();
        let peeking = reference.panel_spans()[3].1;

        let now = Instant::now();
        let mut state = State::new(
            &content,
            &Config::default(),
            Size::new(1280.0, peeking.top + 30.0),
            now,
        );
        state.tick(now + ms(1000));
        assert!(state.entrance().is_revealed(&0));
        assert!(!state.entrance().is_revealed(&3));
    }

    #[test]
    fn deep_link_opens_requested_panel_only() {
        let (mut state, _content, now) = blog();
        assert_eq!(state.apply_deep_link("open=2", now), Some(2));
        state.tick(now + ms(500));
        assert!(state.accordion().is_open(2));
        assert_eq!(state.accordion().open_count(), 1);
    }

    #[test]
    fn opening_a_panel_scrolls_to_it() {
        let (mut state, _content, now) = blog();
        state.update(
            Message::Accordion(accordion::Message::HeaderPressed(4)),
            now,
        );
        state.tick(now + ms(300));
        let effects = state.tick(now + ms(1000));
        assert!(matches!(effects.as_slice(), [Effect::ScrollTo(y)] if *y > 0.0));
    }

    #[test]
    fn consult_is_forwarded() {
        let (mut state, _content, now) = blog();
        let effects = state.update(Message::Accordion(accordion::Message::Consult(1)), now);
        assert_eq!(effects, vec![Effect::Consult(1)]);
    }

    #[test]
    fn open_panel_pushes_later_panels_down() {
        let (mut state, _content, now) = blog();
        let before = state.panel_spans()[3].1.top;
        state.update(
            Message::Accordion(accordion::Message::HeaderPressed(0)),
            now,
        );
        assert!(state.panel_spans()[3].1.top > before);
    }
}
