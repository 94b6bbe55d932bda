// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Radians, Theme};

/// Generic surface for cards and panels.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Carousel card and stat badge.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Navigation bar: translucent at the top of the page, solid once scrolled.
pub fn nav_bar(solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if solid {
            opacity::OPAQUE
        } else {
            opacity::OVERLAY_STRONG
        };
        container::Style {
            background: Some(Background::Gradient(
                gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                    .add_stop(0.0, Color { a: alpha, ..palette::NAVY_900 })
                    .add_stop(1.0, Color { a: alpha, ..palette::NAVY_700 })
                    .into(),
            )),
            text_color: Some(palette::WHITE),
            shadow: if solid { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Dark band behind the hero and the footer.
pub fn band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Empty track of a distribution bar or of the timeline progress line.
pub fn bar_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a distribution bar.
pub fn bar_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ACCENT_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Timeline marker dot.
pub fn marker(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(if active {
            palette::GOLD_500
        } else {
            theme.extended_palette().background.strong.color
        })),
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Cookie notice strip.
pub fn notice(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.strong.color)),
        text_color: Some(palette_ext.background.strong.text),
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
