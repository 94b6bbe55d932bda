// SPDX-License-Identifier: MPL-2.0
//! Outbound links built from the contact form and the footer.

use chrono::NaiveDate;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Validated form values, ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub whatsapp: String,
    pub email: String,
    /// Human label of the selected case type.
    pub case_type: String,
    pub message: String,
}

/// Pre-filled consultation text.
///
/// The message body is cut at `max_chars` characters.
#[must_use]
pub fn compose_message(
    firm_name: &str,
    submission: &Submission,
    max_chars: usize,
    sent_on: NaiveDate,
) -> String {
    let message: String = submission.message.chars().take(max_chars).collect();
    format!(
        "*NOVA CONSULTA - SITE {firm}*\n\n\
         Nome: {name}\n\
         WhatsApp: {whatsapp}\n\
         Email: {email}\n\
         Tipo de Caso: {case_type}\n\
         Mensagem: {message}\n\n   \
         Enviado via site - {date}",
        firm = firm_name.to_uppercase(),
        name = submission.name,
        whatsapp = submission.whatsapp,
        email = submission.email,
        case_type = submission.case_type,
        date = sent_on.format("%d/%m/%Y"),
    )
}

/// `wa.me` link opening a chat with `number` and `text` typed in.
#[must_use]
pub fn whatsapp_url(number: &str, text: &str) -> String {
    let number: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("{WHATSAPP_BASE}{number}?text={}", urlencoding::encode(text))
}

/// `mailto:` link with a consultation subject and greeting.
#[must_use]
pub fn mailto_url(email: &str, firm_name: &str) -> String {
    let subject = format!("Consulta - Site {firm_name} Advogado");
    let body = format!("Olá Dr. {firm_name},\n\nGostaria de agendar uma consulta sobre:\n\n");
    format!(
        "mailto:{email}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
