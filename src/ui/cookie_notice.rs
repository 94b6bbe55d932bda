// SPDX-License-Identifier: MPL-2.0
//! Cookie consent banner shown at the bottom of the window until accepted.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Accept,
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr("cookie-notice-text"))
                .size(typography::BODY_SM)
                .width(Length::Fill),
        )
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(
            button(Text::new(i18n.tr("cookie-notice-accept")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::Accept)
                .style(styles::button::primary),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::notice)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, Message> = view(&i18n);
    }
}
