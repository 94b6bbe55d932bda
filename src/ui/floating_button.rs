// SPDX-License-Identifier: MPL-2.0
//! Floating WhatsApp shortcut.
//!
//! The button appears a second after launch and then pulses periodically to
//! draw attention. Both are pure functions of the time since launch, so the
//! only state is the launch instant.

use crate::config::{
    FLOATING_BUTTON_DELAY_MS, FLOATING_PULSE_DURATION_MS, FLOATING_PULSE_PERIOD_MS,
};
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FloatingButton {
    started: Instant,
}

impl FloatingButton {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { started: now }
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= delay()
    }

    /// True during the first two seconds of every ten-second period.
    #[must_use]
    pub fn is_pulsing(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        let period = u128::from(FLOATING_PULSE_PERIOD_MS);
        if elapsed < period {
            return false;
        }
        elapsed % period < u128::from(FLOATING_PULSE_DURATION_MS)
    }

    /// Next instant at which the button changes appearance.
    #[must_use]
    pub fn next_deadline(&self, now: Instant) -> Instant {
        if !self.is_visible(now) {
            return self.started + delay();
        }
        let elapsed = now.saturating_duration_since(self.started);
        let period = Duration::from_millis(FLOATING_PULSE_PERIOD_MS);
        let cycles = elapsed.as_millis() / period.as_millis();
        let cycle_start = self.started + period * u32::try_from(cycles).unwrap_or(u32::MAX);
        if self.is_pulsing(now) {
            cycle_start + Duration::from_millis(FLOATING_PULSE_DURATION_MS)
        } else {
            cycle_start + period
        }
    }
}

fn delay() -> Duration {
    Duration::from_millis(FLOATING_BUTTON_DELAY_MS)
}

/// Renders the round button, or nothing before it is due.
pub fn view<'a, Message: Clone + 'a>(
    state: &FloatingButton,
    now: Instant,
    on_press: Message,
) -> Option<Element<'a, Message>> {
    if !state.is_visible(now) {
        return None;
    }
    let size = if state.is_pulsing(now) {
        sizing::FLOATING_BUTTON * 1.1
    } else {
        sizing::FLOATING_BUTTON
    };
    Some(
        button(
            Text::new("✆")
                .size(typography::TITLE_LG)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .style(styles::text::colored(palette::WHITE)),
        )
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .on_press(on_press)
        .style(styles::button::floating_whatsapp(state.is_pulsing(now)))
        .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn appears_after_one_second() {
        let start = Instant::now();
        let button = FloatingButton::new(start);
        assert!(!button.is_visible(start + ms(999)));
        assert!(button.is_visible(start + ms(1000)));
    }

    #[test]
    fn pulses_two_seconds_every_ten() {
        let start = Instant::now();
        let button = FloatingButton::new(start);
        assert!(!button.is_pulsing(start + ms(5_000)));
        assert!(button.is_pulsing(start + ms(10_000)));
        assert!(button.is_pulsing(start + ms(11_999)));
        assert!(!button.is_pulsing(start + ms(12_000)));
        assert!(button.is_pulsing(start + ms(20_500)));
    }

    #[test]
    fn deadline_follows_the_next_change() {
        let start = Instant::now();
        let button = FloatingButton::new(start);
        assert_eq!(button.next_deadline(start), start + ms(1000));
        assert_eq!(button.next_deadline(start + ms(3000)), start + ms(10_000));
        assert_eq!(button.next_deadline(start + ms(10_500)), start + ms(12_000));
        assert_eq!(button.next_deadline(start + ms(12_000)), start + ms(20_000));
    }
}
