// SPDX-License-Identifier: MPL-2.0
//! Blog accordion.
//!
//! At most one panel is open. Opening a panel closes the others, grows it to
//! its measured content height, and asks for a scroll to it shortly after.
//! Panels can be filtered by category, opened from a `#open=<index>`
//! fragment, and driven from the keyboard.
//!
//! ```
//! use lexfolio::ui::accordion::{Accordion, AccordionSettings, PanelSpec};
//! use std::time::Instant;
//!
//! let now = Instant::now();
//! let panels = (0..3).map(|_| PanelSpec::new("crm", 120.0)).collect();
//! let mut accordion = Accordion::new(panels, AccordionSettings::default());
//!
//! accordion.toggle(1, now);
//! accordion.toggle(2, now);
//! assert_eq!(accordion.open_index(), Some(2));
//! ```

pub mod deep_link;
pub mod view;

use crate::config::{AccordionConfig, FILTER_FADE_MS, PANEL_ANIMATION_MS};
use crate::ui::state::schedule::Schedule;
use crate::ui::state::tween::Tween;
use std::time::{Duration, Instant};

/// Category id matching every panel.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccordionSettings {
    pub deep_link_delay: Duration,
    pub scroll_delay: Duration,
}

impl Default for AccordionSettings {
    fn default() -> Self {
        Self::from(&AccordionConfig::default())
    }
}

impl From<&AccordionConfig> for AccordionSettings {
    fn from(config: &AccordionConfig) -> Self {
        Self {
            deep_link_delay: config.deep_link_delay(),
            scroll_delay: config.scroll_delay(),
        }
    }
}

/// What the engine needs to know about one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub category: String,
    pub content_height: f32,
}

impl PanelSpec {
    #[must_use]
    pub fn new(category: impl Into<String>, content_height: f32) -> Self {
        Self {
            category: category.into(),
            content_height,
        }
    }
}

/// Filter state of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    /// Filtered out, still on screen while it fades.
    FadingOut,
    Hidden,
}

#[derive(Debug, Clone)]
struct Panel {
    open: bool,
    height: Tween,
    content_height: f32,
    category: String,
    visibility: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    DeepLinkOpen(usize),
    ScrollTo(usize),
    Hide(usize),
}

/// Side effects the screen has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Bring the panel's top under the navigation bar.
    ScrollToPanel(usize),
}

/// Messages emitted by the accordion view.
#[derive(Debug, Clone)]
pub enum Message {
    HeaderPressed(usize),
    /// Enter or Space on the focused header.
    Activate,
    FocusNext,
    FocusPrevious,
    SelectCategory(String),
    /// The call to action at the end of an article was pressed.
    Consult(usize),
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Toggled { index: usize, open: bool },
    CategoryChanged,
    ConsultRequested(usize),
}

#[derive(Debug, Clone)]
pub struct Accordion {
    panels: Vec<Panel>,
    focused: Option<usize>,
    active_category: String,
    pending: Schedule<Pending>,
    settings: AccordionSettings,
}

impl Accordion {
    #[must_use]
    pub fn new(panels: Vec<PanelSpec>, settings: AccordionSettings) -> Self {
        let panels = panels
            .into_iter()
            .map(|spec| Panel {
                open: false,
                height: Tween::settled(0.0),
                content_height: spec.content_height.max(0.0),
                category: spec.category,
                visibility: Visibility::Shown,
            })
            .collect();
        Self {
            panels,
            focused: None,
            active_category: ALL_CATEGORIES.to_string(),
            pending: Schedule::default(),
            settings,
        }
    }

    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|panel| panel.open)
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.panels.iter().position(|panel| panel.open)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.panels.iter().filter(|panel| panel.open).count()
    }

    /// Rotation of the panel's arrow indicator, in degrees.
    #[must_use]
    pub fn indicator_rotation(&self, index: usize) -> f32 {
        if self.is_open(index) {
            180.0
        } else {
            0.0
        }
    }

    /// Displayed height of the panel body at `now`.
    #[must_use]
    pub fn height_at(&self, index: usize, now: Instant) -> f32 {
        self.panels
            .get(index)
            .map_or(0.0, |panel| panel.height.value_at(now))
    }

    #[must_use]
    pub fn content_height(&self, index: usize) -> f32 {
        self.panels.get(index).map_or(0.0, |panel| panel.content_height)
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn visibility(&self, index: usize) -> Visibility {
        self.panels
            .get(index)
            .map_or(Visibility::Hidden, |panel| panel.visibility)
    }

    /// Whether the panel takes room on the page.
    #[must_use]
    pub fn is_displayed(&self, index: usize) -> bool {
        self.visibility(index) != Visibility::Hidden
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// Opens `index` (closing every other panel), or closes it when open.
    ///
    /// Returns true when the panel ends up open. Unknown indices are ignored.
    pub fn toggle(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        let animation = Duration::from_millis(PANEL_ANIMATION_MS);
        let was_open = self.panels[index].open;

        for (other, panel) in self.panels.iter_mut().enumerate() {
            if other != index && panel.open {
                panel.open = false;
                panel.height.retarget(now, 0.0, animation);
            }
        }

        let panel = &mut self.panels[index];
        if was_open {
            panel.open = false;
            panel.height.retarget(now, 0.0, animation);
            self.pending
                .retain(|pending| *pending != Pending::ScrollTo(index));
            false
        } else {
            panel.open = true;
            let target = panel.content_height;
            panel.height.retarget(now, target, animation);
            self.pending
                .retain(|pending| !matches!(pending, Pending::ScrollTo(_)));
            self.pending
                .after(now, self.settings.scroll_delay, Pending::ScrollTo(index));
            true
        }
    }

    /// Schedules the panel named by a `open=<index>` fragment.
    ///
    /// Returns the panel that will open, if the fragment names one.
    pub fn apply_deep_link(&mut self, fragment: &str, now: Instant) -> Option<usize> {
        let index = deep_link::requested_panel(fragment, self.panels.len())?;
        tracing::debug!(index, "deep link scheduled");
        self.pending
            .after(now, self.settings.deep_link_delay, Pending::DeepLinkOpen(index));
        Some(index)
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.panels.len() {
            self.focused = Some(index);
        }
    }

    /// Moves focus to the next displayed header, staying put at the last one.
    pub fn focus_next(&mut self) {
        let start = self.focused.map_or(0, |index| index + 1);
        if let Some(index) = (start..self.panels.len()).find(|&index| self.is_displayed(index)) {
            self.focused = Some(index);
        }
    }

    /// Moves focus to the previous displayed header, staying put at the
    /// first one.
    pub fn focus_previous(&mut self) {
        let found = match self.focused {
            Some(current) => (0..current).rev().find(|&index| self.is_displayed(index)),
            None => (0..self.panels.len()).find(|&index| self.is_displayed(index)),
        };
        if let Some(index) = found {
            self.focused = Some(index);
        }
    }

    /// Toggles the focused panel, if any and not filtered out.
    pub fn activate_focused(&mut self, now: Instant) -> Option<bool> {
        let index = self.focused.filter(|&index| self.is_displayed(index))?;
        Some(self.toggle(index, now))
    }

    /// Takes new content heights, for instance after a resize. The open
    /// panel jumps to its new height.
    pub fn remeasure(&mut self, heights: &[f32]) {
        for (panel, height) in self.panels.iter_mut().zip(heights) {
            panel.content_height = height.max(0.0);
            if panel.open {
                panel.height.snap(panel.content_height);
            }
        }
    }

    /// Shows the panels of `category` (every panel for `all`) and fades
    /// the others out.
    pub fn select_category(&mut self, category: &str, now: Instant) {
        self.active_category = category.to_string();
        let fade = Duration::from_millis(FILTER_FADE_MS);

        for (index, panel) in self.panels.iter_mut().enumerate() {
            let matches = category == ALL_CATEGORIES || panel.category == category;
            if matches {
                panel.visibility = Visibility::Shown;
                self.pending.retain(|pending| *pending != Pending::Hide(index));
            } else if panel.visibility == Visibility::Shown {
                panel.visibility = Visibility::FadingOut;
                self.pending.after(now, fade, Pending::Hide(index));
            }
        }
    }

    /// Releases due continuations.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        for pending in self.pending.drain_due(now) {
            match pending {
                Pending::DeepLinkOpen(index) => {
                    if !self.is_open(index) {
                        self.toggle(index, now);
                    }
                }
                Pending::ScrollTo(index) => {
                    if self.is_open(index) {
                        effects.push(Effect::ScrollToPanel(index));
                    }
                }
                Pending::Hide(index) => {
                    if let Some(panel) = self.panels.get_mut(index) {
                        if panel.visibility == Visibility::FadingOut {
                            panel.visibility = Visibility::Hidden;
                        }
                    }
                }
            }
        }
        effects
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.panels
            .iter()
            .any(|panel| !panel.height.is_finished(now))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_due()
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::HeaderPressed(index) => {
                self.focus(index);
                let open = self.toggle(index, now);
                Event::Toggled { index, open }
            }
            Message::Activate => match (self.focused, self.activate_focused(now)) {
                (Some(index), Some(open)) => Event::Toggled { index, open },
                _ => Event::None,
            },
            Message::FocusNext => {
                self.focus_next();
                Event::None
            }
            Message::FocusPrevious => {
                self.focus_previous();
                Event::None
            }
            Message::SelectCategory(category) => {
                self.select_category(&category, now);
                Event::CategoryChanged
            }
            Message::Consult(index) if index < self.panels.len() => {
                Event::ConsultRequested(index)
            }
            Message::Consult(_) => Event::None,
        }
    }
}
