// SPDX-License-Identifier: MPL-2.0
//! Text color helpers.

use iced::widget::text;
use iced::{Color, Theme};

/// Theme text color at `alpha`, used while an element fades in or out.
pub fn faded(alpha: f32) -> impl Fn(&Theme) -> text::Style {
    let alpha = alpha.clamp(0.0, 1.0);
    move |theme: &Theme| text::Style {
        color: Some(Color {
            a: alpha,
            ..theme.palette().text
        }),
    }
}

/// Fixed color regardless of theme.
pub fn colored(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}
