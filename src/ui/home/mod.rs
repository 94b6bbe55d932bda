// SPDX-License-Identifier: MPL-2.0
//! Home screen: the single scrolling page of the site.
//!
//! The page is a stack of fixed-height blocks (see [`PageLayout`]). Scroll
//! reports from the page scrollable feed a set of visibility observers, each
//! configured like the element family it watches, and their entries start
//! the reveal animations:
//!
//! | Family            | Threshold | Margin       | Effect                          |
//! |-------------------|-----------|--------------|---------------------------------|
//! | section titles    | any       |              | fade in and out (toggle)        |
//! | stat badges       | 0.5       |              | 200 ms stagger                  |
//! | metrics and tags  | 0.2       | bottom -50px | per-metric delay, tags at once  |
//! | contact form      | 0.2       |              | 100 ms stagger per row          |
//! | counter, timeline | 0.5       |              | count up, line fill, markers    |
//! | bars              | 0.3       |              | grow to their percentage        |
//! | pictures          | 0.1       | 50 px        | load                            |
//!
//! Everything time-based is released by [`State::tick`].

pub mod view;

use crate::config::{
    Config, ANCHOR_SCROLL_MARGIN_PX, BADGE_STAGGER_MS, FORM_GROUP_STAGGER_MS, HERO_REVEAL_DELAY_MS,
    MARKER_STAGGER_MS,
};
use crate::content::SiteContent;
use crate::domain::ui::{is_mobile_width, Percent};
use crate::ui::carousel::{self, Carousel, CarouselSettings};
use crate::ui::contact::{self, whatsapp, ContactForm, ContactSettings, MESSAGE_INPUT_ID};
use crate::ui::layout::{anchor_offset, Block, PageLayout, SectionId, Span, RootMargin, FORM_GROUPS};
use crate::ui::notifications::Notification;
use crate::ui::reveal::{
    BarGrowth, CounterAnimation, ImageLibrary, ObserverOptions, Pulse, Sequencer,
    VisibilityObserver,
};
use crate::ui::state::{SmoothScroll, ViewportState};
use chrono::NaiveDate;
use iced::widget::scrollable;
use iced::Size;
use std::time::{Duration, Instant};

/// Id of the page scrollable.
pub const SCROLLABLE_ID: &str = "home-page";

/// Anything on the page that fades in through the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKey {
    Hero,
    Section(SectionId),
    Badge(usize),
    Metric(usize),
    Tag(usize),
    FormGroup(usize),
    Marker(usize),
}

/// One-shot triggers watched as whole blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Counter,
    TimelineProgress,
    Markers,
    Form,
}

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(scrollable::Viewport),
    Carousel(carousel::Message),
    Contact(contact::Message),
    GoTo(SectionId),
    EmailPressed,
    /// An article link in the footer was pressed.
    ArticlePressed(usize),
}

/// Side effects the application turns into tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo(f32),
    Focus(&'static str),
    OpenUrl(String),
    Notify(Notification),
    /// Show the blog with this article open.
    OpenArticle(usize),
}

#[derive(Debug, Clone)]
pub struct State {
    layout: PageLayout,
    width: f32,
    viewport: ViewportState,
    scroll: SmoothScroll,
    carousel: Carousel,
    form: ContactForm,
    images: ImageLibrary,
    contact_email: String,
    animations: bool,

    sections: VisibilityObserver<SectionId>,
    badges: VisibilityObserver<usize>,
    popins: VisibilityObserver<RevealKey>,
    form_watch: VisibilityObserver<Trigger>,
    halfway: VisibilityObserver<Trigger>,
    bar_watch: VisibilityObserver<usize>,
    lazy: VisibilityObserver<Block>,

    sequencer: Sequencer<RevealKey>,
    metric_delays: Vec<Duration>,
    counter: Option<CounterAnimation>,
    bars: Vec<BarGrowth>,
    timeline_line: BarGrowth,
    markers: Vec<Pulse>,
}

impl State {
    /// Builds the page for a window of `size` and reveals what is already in
    /// view.
    #[must_use]
    pub fn new(content: &SiteContent, config: &Config, size: Size, now: Instant) -> Self {
        let mut viewport = ViewportState::default();
        viewport.assume_height(size.width, size.height);

        let mut state = Self {
            layout: PageLayout::home(content, size.width),
            width: size.width,
            viewport,
            scroll: SmoothScroll::default(),
            carousel: Carousel::new(
                content.specialties.len(),
                size.width,
                now,
                CarouselSettings::from(&config.carousel),
            ),
            form: ContactForm::new(ContactSettings::from(&config.contact)),
            images: ImageLibrary::resolve(content, config.general.media_dir.as_deref()),
            contact_email: config.contact.email().to_string(),
            animations: config.reveal.animations_enabled(),

            sections: VisibilityObserver::new(ObserverOptions::toggle(0.0)),
            badges: VisibilityObserver::new(ObserverOptions::one_shot(0.5)),
            popins: VisibilityObserver::new(
                ObserverOptions::one_shot(0.2).with_margin(RootMargin::bottom(-50.0)),
            ),
            form_watch: VisibilityObserver::new(ObserverOptions::one_shot(0.2)),
            halfway: VisibilityObserver::new(ObserverOptions::one_shot(0.5)),
            bar_watch: VisibilityObserver::new(ObserverOptions::one_shot(0.3)),
            lazy: VisibilityObserver::new(
                ObserverOptions::one_shot(0.1).with_margin(RootMargin::uniform(50.0)),
            ),

            sequencer: Sequencer::default(),
            metric_delays: content
                .metrics
                .iter()
                .map(|metric| Duration::from_millis(metric.delay_ms))
                .collect(),
            counter: content
                .counter
                .as_ref()
                .map(|counter| CounterAnimation::new(counter.target)),
            bars: content
                .bars
                .iter()
                .map(|bar| BarGrowth::new(Percent::new(bar.percent)))
                .collect(),
            timeline_line: BarGrowth::timeline(),
            markers: vec![Pulse::default(); content.timeline.len()],
        };

        state.observe_all(content);
        state
            .sequencer
            .reveal_after(now, RevealKey::Hero, Duration::from_millis(HERO_REVEAL_DELAY_MS));
        state.check_visibility(now);
        state
    }

    fn observe_all(&mut self, content: &SiteContent) {
        let layout = &self.layout;
        let stacked = is_mobile_width(self.width);

        for section in SectionId::ALL {
            if section == SectionId::Home {
                continue;
            }
            if let Some(span) = layout.span(Block::SectionTitle(section)) {
                self.sections.observe(section, span);
            }
        }

        if let Some(span) = layout.span(Block::Badges) {
            for (index, span) in item_spans(span, content.stats.len(), stacked)
                .into_iter()
                .enumerate()
            {
                self.badges.observe(index, span);
            }
        }

        if let Some(span) = layout.span(Block::Metrics) {
            for (index, span) in item_spans(span, content.metrics.len(), stacked)
                .into_iter()
                .enumerate()
            {
                self.popins.observe(RevealKey::Metric(index), span);
            }
        }
        if let Some(span) = layout.span(Block::Tags) {
            for index in 0..content.tags.len() {
                self.popins.observe(RevealKey::Tag(index), span);
            }
        }

        if let Some(span) = layout.form_span() {
            self.form_watch.observe(Trigger::Form, span);
        }

        if let Some(span) = layout.span(Block::Counter) {
            self.halfway.observe(Trigger::Counter, span);
        }
        if let Some(span) = layout.span(Block::TimelineProgress) {
            self.halfway.observe(Trigger::TimelineProgress, span);
        }
        if let Some(span) = layout.span(Block::Timeline) {
            self.halfway.observe(Trigger::Markers, span);
        }

        for index in 0..self.bars.len() {
            if let Some(span) = layout.span(Block::Bar(index)) {
                self.bar_watch.observe(index, span);
            }
        }

        for block in self.images.pending_blocks() {
            if let Some(span) = layout.span(block) {
                self.lazy.observe(block, span);
            }
        }
    }

    /// Runs every observer against the current viewport.
    fn check_visibility(&mut self, now: Instant) {
        let visible = self.viewport.visible_span();

        for change in self.sections.check(visible) {
            let key = RevealKey::Section(change.key);
            if change.revealed {
                self.sequencer.reveal_now(now, key);
            } else {
                self.sequencer.hide(&key);
            }
        }

        for change in self.badges.check(visible) {
            self.sequencer.stagger(
                now,
                RevealKey::Badge(change.key),
                change.index,
                Duration::ZERO,
                Duration::from_millis(BADGE_STAGGER_MS),
            );
        }

        for change in self.popins.check(visible) {
            match change.key {
                RevealKey::Metric(index) => {
                    let delay = self.metric_delays.get(index).copied().unwrap_or_default();
                    self.sequencer.reveal_after(now, change.key, delay);
                }
                key => self.sequencer.reveal_now(now, key),
            }
        }

        if !self.form_watch.check(visible).is_empty() {
            for row in 0..FORM_GROUPS {
                self.sequencer.stagger(
                    now,
                    RevealKey::FormGroup(row),
                    row,
                    Duration::ZERO,
                    Duration::from_millis(FORM_GROUP_STAGGER_MS),
                );
            }
        }

        for change in self.halfway.check(visible) {
            match change.key {
                Trigger::Counter => {
                    if let Some(counter) = self.counter.as_mut() {
                        counter.start(now);
                    }
                }
                Trigger::TimelineProgress => self.timeline_line.start(now),
                Trigger::Markers => {
                    for index in 0..self.markers.len() {
                        self.sequencer.stagger(
                            now,
                            RevealKey::Marker(index),
                            index,
                            Duration::ZERO,
                            Duration::from_millis(MARKER_STAGGER_MS),
                        );
                    }
                }
                Trigger::Form => {}
            }
        }

        for change in self.bar_watch.check(visible) {
            if let Some(bar) = self.bars.get_mut(change.key) {
                bar.start(now);
            }
        }

        for change in self.lazy.check(visible) {
            tracing::debug!(block = ?change.key, "loading pictures");
            self.images.load_block(change.key);
        }
    }

    /// Applies a (debounced) window size.
    pub fn relayout(&mut self, content: &SiteContent, size: Size, now: Instant) {
        self.width = size.width;
        self.layout = PageLayout::home(content, size.width);
        self.carousel.relayout(size.width);
        self.observe_all(content);
        self.check_visibility(now);
    }

    /// Glides to the anchor of `section`.
    pub fn scroll_to_section(&mut self, section: SectionId, now: Instant) {
        let Some(top) = self.layout.section_top(section) else {
            return;
        };
        let target = self.clamp_scroll(anchor_offset(top, ANCHOR_SCROLL_MARGIN_PX));
        self.scroll.start(now, self.viewport.scroll_y(), target);
    }

    /// Glides until the contact form sits in the middle of the window.
    fn scroll_to_form(&mut self, now: Instant) {
        let Some(span) = self.layout.form_span() else {
            return;
        };
        let centered = span.top + span.height / 2.0 - self.viewport.height() / 2.0;
        let target = self.clamp_scroll(centered);
        self.scroll.start(now, self.viewport.scroll_y(), target);
    }

    fn clamp_scroll(&self, y: f32) -> f32 {
        let max = (self.layout.total_height() - self.viewport.height()).max(0.0);
        y.clamp(0.0, max)
    }

    /// Scrolls to the form and asks for a consultation about `title`.
    pub fn request_consultation(&mut self, title: Option<&str>, now: Instant) {
        self.scroll_to_section(SectionId::Contact, now);
        self.form.request_consultation(title, now);
    }

    /// Releases every due deadline and the running scroll frame.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();

        self.carousel.tick(now);

        for key in self.sequencer.tick(now) {
            if let RevealKey::Marker(index) = key {
                if let Some(marker) = self.markers.get_mut(index) {
                    marker.trigger(now);
                }
            }
        }

        for effect in self.form.tick(now) {
            match effect {
                contact::Effect::ScrollToForm => self.scroll_to_form(now),
                contact::Effect::FocusMessage => effects.push(Effect::Focus(MESSAGE_INPUT_ID)),
            }
        }

        if let Some(y) = self.scroll.tick(now) {
            self.viewport.set_scroll_y(y);
            self.check_visibility(now);
            effects.push(Effect::ScrollTo(y));
        }

        effects
    }

    /// True while something on the page moves by itself.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.is_active()
            || self.carousel.is_animating(now)
            || self.sequencer.is_active(now)
            || self
                .counter
                .as_ref()
                .is_some_and(|counter| counter.is_running(now))
            || self.bars.iter().any(|bar| bar.is_animating(now))
            || self.timeline_line.is_animating(now)
            || self.markers.iter().any(|marker| marker.is_pulsing(now))
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.carousel.next_deadline(),
            self.sequencer.next_deadline(),
            self.form.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn update(
        &mut self,
        message: Message,
        content: &SiteContent,
        now: Instant,
        today: NaiveDate,
    ) -> Vec<Effect> {
        match message {
            Message::Scrolled(viewport) => {
                let bounds = viewport.bounds();
                self.viewport.update(bounds, viewport.absolute_offset());
                self.check_visibility(now);
                Vec::new()
            }
            Message::Carousel(message) => {
                if let carousel::Event::ConsultRequested(card) = self.carousel.update(message, now)
                {
                    let title = content.specialties.get(card).map(|card| card.title.as_str());
                    self.request_consultation(title, now);
                }
                Vec::new()
            }
            Message::Contact(message) => {
                match self.form.update(message, &content.firm.name, now, today) {
                    contact::Event::None => Vec::new(),
                    contact::Event::Focus(field) => {
                        field.input_id().map(Effect::Focus).into_iter().collect()
                    }
                    contact::Event::Rejected(err) => {
                        vec![Effect::Notify(Notification::error(err.i18n_key()))]
                    }
                    contact::Event::Send(url) => vec![Effect::OpenUrl(url)],
                }
            }
            Message::GoTo(section) => {
                self.scroll_to_section(section, now);
                Vec::new()
            }
            Message::EmailPressed => vec![Effect::OpenUrl(whatsapp::mailto_url(
                &self.contact_email,
                &content.firm.name,
            ))],
            Message::ArticlePressed(index) => vec![Effect::OpenArticle(index)],
        }
    }

    /// Back to the top after switching screens.
    pub fn reset_scroll(&mut self, now: Instant) {
        self.scroll.cancel();
        self.viewport.reset_offset();
        self.check_visibility(now);
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y()
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn images(&self) -> &ImageLibrary {
        &self.images
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        is_mobile_width(self.width)
    }

    /// Fade-in progress of an element in `[0, 1]`.
    #[must_use]
    pub fn reveal_progress(&self, key: RevealKey, now: Instant) -> f32 {
        if self.animations {
            self.sequencer.progress(&key, now)
        } else {
            1.0
        }
    }

    /// Number shown by the counter.
    #[must_use]
    pub fn counter_value(&self, now: Instant) -> Option<u32> {
        let counter = self.counter.as_ref()?;
        Some(if self.animations {
            counter.value_at(now)
        } else {
            counter.target()
        })
    }

    #[must_use]
    pub fn bar_width(&self, index: usize, now: Instant) -> Percent {
        self.bars.get(index).map_or(Percent::ZERO, |bar| {
            if self.animations {
                bar.width_at(now)
            } else {
                bar.target()
            }
        })
    }

    #[must_use]
    pub fn timeline_progress(&self, now: Instant) -> Percent {
        if self.animations {
            self.timeline_line.width_at(now)
        } else {
            Percent::FULL
        }
    }

    /// Scale and lit state of a timeline marker.
    #[must_use]
    pub fn marker(&self, index: usize, now: Instant) -> (f32, bool) {
        if !self.animations {
            return (1.0, true);
        }
        self.markers
            .get(index)
            .map_or((1.0, false), |marker| {
                (marker.scale_at(now), marker.is_active())
            })
    }
}

/// Splits a block into per-item spans: side by side items share the row,
/// stacked items get equal slices.
fn item_spans(block: Span, count: usize, stacked: bool) -> Vec<Span> {
    if count == 0 {
        return Vec::new();
    }
    if !stacked {
        return vec![block; count];
    }
    let height = block.height / count as f32;
    (0..count)
        .map(|index| Span::new(block.top + height * index as f32, height))
        .collect()
}
