// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (consult, submit, accept).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_400)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled()(theme, status),
    }
}

/// Round arrow buttons on top of the carousel.
pub fn carousel_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        button::Status::Disabled => opacity::OVERLAY_SUBTLE,
        button::Status::Active => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            WHITE
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Greyed out, non-interactive button.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Carousel page indicator.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::ACCENT_500,
            (false, button::Status::Hovered) => palette::ACCENT_400,
            (false, _) => palette::GRAY_200,
        };
        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Links of the navigation bar. The active link is underlined with the accent.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) | (false, button::Status::Hovered) => palette::ACCENT_400,
            _ => WHITE,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active {
                    palette::ACCENT_500
                } else {
                    Color::TRANSPARENT
                },
                width: if active { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Category filter tags of the blog screen.
pub fn chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let (background, text_color) = match (active, status) {
            (true, _) => (palette::ACCENT_500, WHITE),
            (false, button::Status::Hovered) => (palette::ACCENT_400, WHITE),
            (false, _) => (
                palette_ext.background.weak.color,
                palette_ext.background.base.text,
            ),
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Accordion panel header. The open panel keeps the accent border.
pub fn accordion_header(
    open: bool,
    focused: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette_ext.background.strong.color
            }
            _ => palette_ext.background.weak.color,
        };
        let border_color = if open || focused {
            palette::ACCENT_500
        } else {
            palette_ext.background.strong.color
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette_ext.background.base.text,
            border: Border {
                color: border_color,
                width: if focused { 2.0 } else { 1.0 },
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Floating WhatsApp button; `pulsing` enlarges its glow.
pub fn floating_whatsapp(pulsing: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let mut glow = if pulsing { shadow::LG } else { shadow::MD };
        if pulsing {
            glow.color = Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHATSAPP
            };
        }
        button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
                _ => palette::WHATSAPP,
            })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: glow,
            snap: true,
        }
    }
}

/// Text-only button used for links and close icons.
pub fn link(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette::ACCENT_400,
            _ => palette::ACCENT_500,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_dot_uses_accent() {
        let style = dot(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ACCENT_500))
        );
    }

    #[test]
    fn disabled_arrow_is_dimmed() {
        let style = carousel_arrow(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
