// SPDX-License-Identifier: MPL-2.0
//! Rendering of the consultation form.

use super::{ContactForm, Field, FieldFeedback, Message};
use crate::content::CaseType;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::layout::FORM_GROUPS;
use crate::ui::reveal::sequencer::FADE_OFFSET_PX;
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Space, Text};
use iced::widget::Id;
use iced::{Color, Element, Length};

const MESSAGE_INPUT_HEIGHT: f32 = 96.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a ContactForm,
    pub case_types: &'a [CaseType],
    /// Entrance progress of each form row in `[0, 1]`.
    pub rows: [f32; FORM_GROUPS],
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let form = ctx.form;
    let i18n = ctx.i18n;

    let name = input(
        form.name(),
        i18n.tr("contact-name-placeholder"),
        Field::Name,
        form.feedback(Field::Name),
    )
    .on_input(Message::NameChanged);

    let whatsapp = input(
        form.whatsapp(),
        i18n.tr("contact-whatsapp-placeholder"),
        Field::Whatsapp,
        form.feedback(Field::Whatsapp),
    )
    .on_input(Message::WhatsappChanged);

    let email = input(
        form.email(),
        i18n.tr("contact-email-placeholder"),
        Field::Email,
        form.feedback(Field::Email),
    )
    .on_input(Message::EmailChanged);

    let case_type = pick_list(
        ctx.case_types,
        form.case_type().cloned(),
        Message::CaseTypeSelected,
    )
    .placeholder(i18n.tr("contact-case-type-placeholder"))
    .width(Length::Fill)
    .padding(spacing::SM);

    let message_placeholder = match form.consult_title() {
        Some(title) => i18n.tr_with_args("contact-cta-placeholder", &[("title", title)]),
        None => i18n.tr("contact-message-placeholder"),
    };
    let message = input(
        form.message(),
        message_placeholder,
        Field::Message,
        form.feedback(Field::Message),
    )
    .on_input(Message::MessageChanged)
    .padding([spacing::MD, spacing::SM]);

    let rows: [(String, Element<'a, Message>); FORM_GROUPS] = [
        (i18n.tr("contact-name-label"), name.into()),
        (i18n.tr("contact-whatsapp-label"), whatsapp.into()),
        (i18n.tr("contact-email-label"), email.into()),
        (i18n.tr("contact-case-type-label"), case_type.into()),
        (
            i18n.tr("contact-message-label"),
            Container::new(message)
                .height(Length::Fixed(MESSAGE_INPUT_HEIGHT))
                .into(),
        ),
    ];

    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);
    for ((label, field), progress) in rows.into_iter().zip(ctx.rows) {
        column = column.push(group(label, field, progress));
    }

    let submit = button(Text::new(i18n.tr("contact-submit")).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::SM)
        .on_press(Message::Submit)
        .style(styles::button::primary);

    Container::new(column.push(submit))
        .max_width(sizing::FORM_MAX_WIDTH)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn input<'a>(
    value: &'a str,
    placeholder: String,
    field: Field,
    feedback: FieldFeedback,
) -> text_input::TextInput<'a, Message> {
    let mut input = text_input(&placeholder, value)
        .on_submit(Message::FieldSubmitted(field))
        .padding(spacing::SM)
        .size(typography::BODY)
        .style(styles::input::field(feedback_color(feedback)));
    if let Some(id) = field.input_id() {
        input = input.id(Id::new(id));
    }
    input
}

fn group<'a>(label: String, field: Element<'a, Message>, progress: f32) -> Element<'a, Message> {
    let offset = FADE_OFFSET_PX * (1.0 - progress);
    Column::new()
        .spacing(spacing::XXS)
        .push(Space::new().height(Length::Fixed(offset)))
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .style(styles::text::faded(progress)),
        )
        .push(field)
        .into()
}

/// Border color for a field's feedback; `None` keeps the theme border.
#[must_use]
pub fn feedback_color(feedback: FieldFeedback) -> Option<Color> {
    match feedback {
        FieldFeedback::Neutral => None,
        FieldFeedback::Invalid => Some(palette::FIELD_INVALID),
        FieldFeedback::Valid => Some(palette::ACCENT_500),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_maps_to_border_colors() {
        assert_eq!(feedback_color(FieldFeedback::Neutral), None);
        assert_eq!(
            feedback_color(FieldFeedback::Invalid),
            Some(palette::FIELD_INVALID)
        );
        assert_eq!(
            feedback_color(FieldFeedback::Valid),
            Some(palette::ACCENT_500)
        );
    }

    #[test]
    fn form_view_renders() {
        let i18n = I18n::default();
        let form = ContactForm::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
            case_types: &[],
            rows: [1.0; FORM_GROUPS],
        });
    }
}
