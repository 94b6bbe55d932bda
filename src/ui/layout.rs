// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Both screens are vertical stacks of fixed-height blocks. The same block
//! list drives the view (every block is rendered at exactly its height) and
//! the visibility observers (every block has a known span in scroll
//! coordinates), so intersection tests never need widget measurement.

use crate::content::SiteContent;
use crate::domain::ui::is_mobile_width;

/// Height of the navigation bar overlaying the top of the page.
pub const NAV_HEIGHT: f32 = 72.0;

/// Vertical extent of an element in scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this span covered by `viewport` grown by `margin`.
    ///
    /// Zero-height spans count as fully visible when their position lies
    /// inside the viewport.
    #[must_use]
    pub fn intersection_ratio(&self, viewport: Span, margin: RootMargin) -> f32 {
        let root_top = viewport.top - margin.top;
        let root_bottom = viewport.bottom() + margin.bottom;
        if root_bottom <= root_top {
            return 0.0;
        }

        if self.height <= 0.0 {
            return if self.top >= root_top && self.top <= root_bottom {
                1.0
            } else {
                0.0
            };
        }

        let overlap = self.bottom().min(root_bottom) - self.top.max(root_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Growth applied to the viewport edges before intersecting.
/// Negative values shrink the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub bottom: f32,
}

impl RootMargin {
    pub const NONE: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// Margin applied to the bottom edge only.
    #[must_use]
    pub fn bottom(px: f32) -> Self {
        Self {
            top: 0.0,
            bottom: px,
        }
    }

    /// Same margin on both edges.
    #[must_use]
    pub fn uniform(px: f32) -> Self {
        Self {
            top: px,
            bottom: px,
        }
    }
}

/// Anchored sections reachable from the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Specialties,
    Results,
    Timeline,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Specialties,
        SectionId::Results,
        SectionId::Timeline,
        SectionId::Contact,
    ];

    /// i18n key of the menu label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Specialties => "nav-specialties",
            SectionId::Results => "nav-results",
            SectionId::Timeline => "nav-timeline",
            SectionId::Contact => "nav-contact",
        }
    }

    /// Fragment name used by `--link` (for example `home#contato`).
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "inicio",
            SectionId::About => "sobre",
            SectionId::Specialties => "especialidades",
            SectionId::Results => "resultados",
            SectionId::Timeline => "trajetoria",
            SectionId::Contact => "contato",
        }
    }

    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

/// One fixed-height row of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Hero,
    SectionTitle(SectionId),
    About,
    Badges,
    Counter,
    Metrics,
    Tags,
    Carousel,
    Bar(usize),
    TimelineProgress,
    Timeline,
    FormGroup(usize),
    FormActions,
    Footer,
}

/// Number of rows of the contact form (name, WhatsApp, e-mail, case type, message).
pub const FORM_GROUPS: usize = 5;

const HERO_HEIGHT: f32 = 560.0;
const SECTION_TITLE_HEIGHT: f32 = 120.0;
const ABOUT_HEIGHT: f32 = 420.0;
const ABOUT_HEIGHT_MOBILE: f32 = 720.0;
const BADGE_ROW_HEIGHT: f32 = 140.0;
const BADGE_STACKED_HEIGHT: f32 = 110.0;
const COUNTER_HEIGHT: f32 = 160.0;
const METRIC_ROW_HEIGHT: f32 = 140.0;
const METRIC_STACKED_HEIGHT: f32 = 90.0;
const TAGS_HEIGHT: f32 = 80.0;
const TAGS_HEIGHT_MOBILE: f32 = 150.0;
pub const CAROUSEL_HEIGHT: f32 = 480.0;
pub const BAR_HEIGHT: f32 = 56.0;
const TIMELINE_PROGRESS_HEIGHT: f32 = 40.0;
pub const TIMELINE_ENTRY_HEIGHT: f32 = 120.0;
const FORM_GROUP_HEIGHT: f32 = 96.0;
const MESSAGE_GROUP_HEIGHT: f32 = 180.0;
const FORM_ACTIONS_HEIGHT: f32 = 96.0;
const FOOTER_HEIGHT: f32 = 240.0;

/// Resolved block stack of the home screen for one viewport width.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    blocks: Vec<(Block, Span)>,
}

impl PageLayout {
    /// Lays out the home screen for `content` at `width`.
    #[must_use]
    pub fn home(content: &SiteContent, width: f32) -> Self {
        let mobile = is_mobile_width(width);
        let mut rows: Vec<(Block, f32)> = Vec::new();

        rows.push((Block::Hero, HERO_HEIGHT));

        rows.push((Block::SectionTitle(SectionId::About), SECTION_TITLE_HEIGHT));
        rows.push((
            Block::About,
            if mobile { ABOUT_HEIGHT_MOBILE } else { ABOUT_HEIGHT },
        ));

        if !content.stats.is_empty() {
            let height = if mobile {
                BADGE_STACKED_HEIGHT * content.stats.len() as f32
            } else {
                BADGE_ROW_HEIGHT
            };
            rows.push((Block::Badges, height));
        }

        rows.push((
            Block::SectionTitle(SectionId::Specialties),
            SECTION_TITLE_HEIGHT,
        ));
        rows.push((Block::Carousel, CAROUSEL_HEIGHT));

        rows.push((Block::SectionTitle(SectionId::Results), SECTION_TITLE_HEIGHT));
        if content.counter.is_some() {
            rows.push((Block::Counter, COUNTER_HEIGHT));
        }
        if !content.metrics.is_empty() {
            let height = if mobile {
                METRIC_STACKED_HEIGHT * content.metrics.len() as f32
            } else {
                METRIC_ROW_HEIGHT
            };
            rows.push((Block::Metrics, height));
        }
        for index in 0..content.bars.len() {
            rows.push((Block::Bar(index), BAR_HEIGHT));
        }
        if !content.tags.is_empty() {
            rows.push((
                Block::Tags,
                if mobile { TAGS_HEIGHT_MOBILE } else { TAGS_HEIGHT },
            ));
        }

        if !content.timeline.is_empty() {
            rows.push((Block::SectionTitle(SectionId::Timeline), SECTION_TITLE_HEIGHT));
            rows.push((Block::TimelineProgress, TIMELINE_PROGRESS_HEIGHT));
            rows.push((
                Block::Timeline,
                TIMELINE_ENTRY_HEIGHT * content.timeline.len() as f32,
            ));
        }

        rows.push((Block::SectionTitle(SectionId::Contact), SECTION_TITLE_HEIGHT));
        for index in 0..FORM_GROUPS {
            let height = if index == FORM_GROUPS - 1 {
                MESSAGE_GROUP_HEIGHT
            } else {
                FORM_GROUP_HEIGHT
            };
            rows.push((Block::FormGroup(index), height));
        }
        rows.push((Block::FormActions, FORM_ACTIONS_HEIGHT));
        rows.push((Block::Footer, FOOTER_HEIGHT));

        Self::stack(rows)
    }

    fn stack(rows: Vec<(Block, f32)>) -> Self {
        let mut top = 0.0;
        let blocks = rows
            .into_iter()
            .map(|(block, height)| {
                let span = Span::new(top, height);
                top += height;
                (block, span)
            })
            .collect();
        Self { blocks }
    }

    pub fn blocks(&self) -> impl Iterator<Item = (Block, Span)> + '_ {
        self.blocks.iter().copied()
    }

    #[must_use]
    pub fn span(&self, block: Block) -> Option<Span> {
        self.blocks
            .iter()
            .find(|(candidate, _)| *candidate == block)
            .map(|(_, span)| *span)
    }

    /// Span from the first to the last form row, inclusive.
    #[must_use]
    pub fn form_span(&self) -> Option<Span> {
        let first = self.span(Block::FormGroup(0))?;
        let last = self.span(Block::FormGroup(FORM_GROUPS - 1))?;
        Some(Span::new(first.top, last.bottom() - first.top))
    }

    /// Top of the anchored section in scroll coordinates.
    #[must_use]
    pub fn section_top(&self, section: SectionId) -> Option<f32> {
        match section {
            SectionId::Home => self.span(Block::Hero).map(|span| span.top),
            other => self.span(Block::SectionTitle(other)).map(|span| span.top),
        }
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.blocks.last().map_or(0.0, |(_, span)| span.bottom())
    }
}

/// Scroll offset that brings `top` just below the navigation bar.
#[must_use]
pub fn anchor_offset(top: f32, margin: f32) -> f32 {
    (top - NAV_HEIGHT - margin).max(0.0)
}

/// Rough rendered height of wrapped text, used where widgets cannot be
/// measured ahead of layout.
#[must_use]
pub fn estimate_text_height(text: &str, width: f32, font_size: f32, line_height: f32) -> f32 {
    let char_width = font_size * 0.55;
    let per_line = (width / char_width).floor().max(1.0) as usize;
    let lines: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(per_line).max(1))
        .sum();
    lines.max(1) as f32 * font_size * line_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ratio_of_fully_visible_span_is_one() {
        let element = Span::new(100.0, 50.0);
        let viewport = Span::new(0.0, 800.0);
        assert_relative_eq!(element.intersection_ratio(viewport, RootMargin::NONE), 1.0);
    }

    #[test]
    fn negative_bottom_margin_shrinks_viewport() {
        let element = Span::new(760.0, 100.0);
        let viewport = Span::new(0.0, 800.0);

        assert_relative_eq!(
            element.intersection_ratio(viewport, RootMargin::NONE),
            0.4,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            element.intersection_ratio(viewport, RootMargin::bottom(-50.0)),
            0.0
        );
    }

    #[test]
    fn positive_margin_detects_elements_early() {
        let element = Span::new(820.0, 100.0);
        let viewport = Span::new(0.0, 800.0);
        let ratio = element.intersection_ratio(viewport, RootMargin::uniform(50.0));
        assert_relative_eq!(ratio, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn anchor_offset_subtracts_header_and_margin() {
        assert_relative_eq!(anchor_offset(1000.0, 20.0), 908.0);
        assert_relative_eq!(anchor_offset(10.0, 20.0), 0.0);
    }

    #[test]
    fn home_layout_is_contiguous() {
        let content = SiteContent::bundled().expect("bundled content parses");
        let layout = PageLayout::home(&content, 1280.0);

        let mut expected_top = 0.0;
        for (_, span) in layout.blocks() {
            assert_relative_eq!(span.top, expected_top);
            expected_top = span.bottom();
        }
        assert_relative_eq!(layout.total_height(), expected_top);
        assert!(layout.section_top(SectionId::Contact).is_some());
    }

    #[test]
    fn mobile_layout_is_taller() {
        let content = SiteContent::bundled().expect("bundled content parses");
        let desktop = PageLayout::home(&content, 1280.0);
        let mobile = PageLayout::home(&content, 400.0);
        assert!(mobile.total_height() > desktop.total_height());
    }

    #[test]
    fn text_estimate_grows_with_length() {
        let short = estimate_text_height("abc", 400.0, 16.0, 1.5);
        let long = estimate_text_height(&"a".repeat(400), 400.0, 16.0, 1.5);
        assert!(long > short);
        assert_relative_eq!(short, 24.0);
    }
}
