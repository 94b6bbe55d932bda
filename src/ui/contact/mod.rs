// SPDX-License-Identifier: MPL-2.0
//! Consultation form.
//!
//! Every field is required. A valid submission is turned into a pre-filled
//! WhatsApp conversation with the practice; nothing is sent anywhere else.
//! The form clears itself a little after the link was handed over.

pub mod phone;
pub mod view;
pub mod whatsapp;

use crate::config::{ContactConfig, CTA_FOCUS_DELAY_MS, MIN_PHONE_DIGITS};
use crate::content::CaseType;
use crate::ui::state::schedule::Schedule;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use whatsapp::Submission;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Title used by the consultation shortcut when none is known.
pub const DEFAULT_CONSULT_TITLE: &str = "Consulta Especializada";

/// Widget id of the message input, used to focus it.
pub const MESSAGE_INPUT_ID: &str = "contact-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Whatsapp,
    Email,
    CaseType,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Whatsapp,
        Field::Email,
        Field::CaseType,
        Field::Message,
    ];

    fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Whatsapp => 1,
            Field::Email => 2,
            Field::CaseType => 3,
            Field::Message => 4,
        }
    }

    /// Row of the form layout holding this field.
    #[must_use]
    pub fn row(self) -> usize {
        self.slot()
    }

    /// Widget id of the input, when the field is a text input.
    #[must_use]
    pub fn input_id(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("contact-name"),
            Field::Whatsapp => Some("contact-whatsapp"),
            Field::Email => Some("contact-email"),
            Field::CaseType => None,
            Field::Message => Some(MESSAGE_INPUT_ID),
        }
    }

    /// Next text input after this one.
    #[must_use]
    pub fn next_input(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Whatsapp),
            Field::Whatsapp => Some(Field::Email),
            Field::Email | Field::CaseType => Some(Field::Message),
            Field::Message => None,
        }
    }
}

/// Border state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFeedback {
    #[default]
    Neutral,
    Invalid,
    Valid,
}

/// Reasons a submission is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    MissingField(Field),
    InvalidWhatsapp,
    InvalidEmail,
}

impl ContactError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ContactError::MissingField(_) => "contact-error-required",
            ContactError::InvalidWhatsapp => "contact-error-whatsapp",
            ContactError::InvalidEmail => "contact-error-email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    pub whatsapp_number: String,
    pub max_message_chars: usize,
    pub reset_delay: Duration,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self::from(&ContactConfig::default())
    }
}

impl From<&ContactConfig> for ContactSettings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            whatsapp_number: config.whatsapp_number().to_string(),
            max_message_chars: config.max_message_chars(),
            reset_delay: config.reset_delay(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Reset,
    Placeholder(String),
}

/// Follow-ups released by [`ContactForm::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The form was cleared; bring it back into view.
    ScrollToForm,
    /// Focus the message input.
    FocusMessage,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    WhatsappChanged(String),
    EmailChanged(String),
    CaseTypeSelected(CaseType),
    MessageChanged(String),
    /// Enter pressed inside a field.
    FieldSubmitted(Field),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Move keyboard focus to the field.
    Focus(Field),
    /// The form was refused; show the error.
    Rejected(ContactError),
    /// Open this WhatsApp link.
    Send(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    whatsapp: String,
    email: String,
    case_type: Option<CaseType>,
    message: String,
    feedback: [FieldFeedback; 5],
    consult_title: Option<String>,
    pending: Schedule<Pending>,
    settings: ContactSettings,
}

impl ContactForm {
    #[must_use]
    pub fn new(settings: ContactSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn case_type(&self) -> Option<&CaseType> {
        self.case_type.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn feedback(&self, field: Field) -> FieldFeedback {
        self.feedback[field.slot()]
    }

    /// Title shown in the message placeholder after a consultation shortcut.
    #[must_use]
    pub fn consult_title(&self) -> Option<&str> {
        self.consult_title.as_deref()
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Whatsapp => &self.whatsapp,
            Field::Email => &self.email,
            Field::CaseType => self
                .case_type
                .as_ref()
                .map_or("", |case| case.value.as_str()),
            Field::Message => &self.message,
        }
    }

    fn is_blank(&self, field: Field) -> bool {
        self.value(field).trim().is_empty()
    }

    fn edited(&mut self, field: Field) {
        if !self.is_blank(field) {
            self.feedback[field.slot()] = FieldFeedback::Valid;
        }
    }

    /// Leaving a field flags it when empty and clears the flag otherwise.
    pub fn leave(&mut self, field: Field) {
        self.feedback[field.slot()] = if self.is_blank(field) {
            FieldFeedback::Invalid
        } else {
            FieldFeedback::Neutral
        };
    }

    /// Checks the form and returns the trimmed values.
    pub fn validate(&self) -> Result<Submission, ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|field| self.is_blank(*field)) {
            return Err(ContactError::MissingField(field));
        }

        let whatsapp = self.whatsapp.trim();
        if !phone::has_min_digits(whatsapp, MIN_PHONE_DIGITS) {
            return Err(ContactError::InvalidWhatsapp);
        }

        let email = self.email.trim();
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(Submission {
            name: self.name.trim().to_string(),
            whatsapp: whatsapp.to_string(),
            email: email.to_string(),
            case_type: self
                .case_type
                .as_ref()
                .map(|case| case.label.clone())
                .unwrap_or_default(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validates and builds the WhatsApp link. On success the form resets
    /// after the configured delay.
    pub fn submit(
        &mut self,
        firm_name: &str,
        now: Instant,
        today: NaiveDate,
    ) -> Result<String, ContactError> {
        let submission = match self.validate() {
            Ok(submission) => submission,
            Err(err) => {
                for field in Field::ALL {
                    if self.is_blank(field) {
                        self.feedback[field.slot()] = FieldFeedback::Invalid;
                    }
                }
                tracing::debug!(reason = err.i18n_key(), "contact form refused");
                return Err(err);
            }
        };

        let text = whatsapp::compose_message(
            firm_name,
            &submission,
            self.settings.max_message_chars,
            today,
        );
        self.pending.retain(|pending| *pending != Pending::Reset);
        self.pending
            .after(now, self.settings.reset_delay, Pending::Reset);
        tracing::info!("consultation forwarded to WhatsApp");
        Ok(whatsapp::whatsapp_url(&self.settings.whatsapp_number, &text))
    }

    /// Clears every value and feedback. The consultation title survives.
    pub fn reset(&mut self) {
        self.name.clear();
        self.whatsapp.clear();
        self.email.clear();
        self.case_type = None;
        self.message.clear();
        self.feedback = [FieldFeedback::Neutral; 5];
    }

    /// Prepares the message field for a consultation about `title`.
    pub fn request_consultation(&mut self, title: Option<&str>, now: Instant) {
        let title = title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_CONSULT_TITLE)
            .to_string();
        self.pending
            .retain(|pending| !matches!(pending, Pending::Placeholder(_)));
        self.pending.after(
            now,
            Duration::from_millis(CTA_FOCUS_DELAY_MS),
            Pending::Placeholder(title),
        );
    }

    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        for pending in self.pending.drain_due(now) {
            match pending {
                Pending::Reset => {
                    self.reset();
                    effects.push(Effect::ScrollToForm);
                }
                Pending::Placeholder(title) => {
                    self.consult_title = Some(title);
                    effects.push(Effect::FocusMessage);
                }
            }
        }
        effects
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.next_due()
    }

    pub fn update(
        &mut self,
        message: Message,
        firm_name: &str,
        now: Instant,
        today: NaiveDate,
    ) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                self.edited(Field::Name);
                Event::None
            }
            Message::WhatsappChanged(value) => {
                self.whatsapp = phone::mask(&value);
                self.edited(Field::Whatsapp);
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                self.edited(Field::Email);
                Event::None
            }
            Message::CaseTypeSelected(case) => {
                self.case_type = Some(case);
                self.edited(Field::CaseType);
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                self.edited(Field::Message);
                Event::None
            }
            Message::FieldSubmitted(field) => {
                self.leave(field);
                match field.next_input() {
                    Some(next) => Event::Focus(next),
                    None => self.update(Message::Submit, firm_name, now, today),
                }
            }
            Message::Submit => match self.submit(firm_name, now, today) {
                Ok(url) => Event::Send(url),
                Err(err) => Event::Rejected(err),
            },
        }
    }
}
