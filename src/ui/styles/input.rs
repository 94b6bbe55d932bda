// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Contact form field. `feedback` overrides the border color once the field
/// has been validated.
pub fn field(feedback: Option<Color>) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let palette_ext = theme.extended_palette();
        let (idle_color, width) = match status {
            text_input::Status::Active | text_input::Status::Disabled => {
                (palette_ext.background.strong.color, 1.0)
            }
            text_input::Status::Hovered => (palette::ACCENT_400, 1.0),
            text_input::Status::Focused { .. } => (palette::ACCENT_500, 2.0),
        };
        let background = match status {
            text_input::Status::Disabled => palette_ext.background.weak.color,
            _ => palette_ext.background.base.color,
        };

        text_input::Style {
            background: Background::Color(background),
            border: Border {
                color: feedback.unwrap_or(idle_color),
                width: if feedback.is_some() { 2.0 } else { width },
                radius: radius::SM.into(),
            },
            icon: palette_ext.background.strong.text,
            placeholder: palette_ext.background.strong.color,
            value: palette_ext.background.base.text,
            selection: Color {
                a: 0.4,
                ..palette::ACCENT_500
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_color_wins_over_status() {
        let style = field(Some(palette::FIELD_INVALID))(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::FIELD_INVALID);
        assert!((style.border.width - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hovered_field_uses_accent() {
        let style = field(None)(&Theme::Dark, text_input::Status::Hovered);
        assert_eq!(style.border.color, palette::ACCENT_400);
    }
}
