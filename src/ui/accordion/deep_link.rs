// SPDX-License-Identifier: MPL-2.0
//! Fragment parameters such as `open=2`.
//!
//! Fragments are read like a query string: `&`-separated `key=value` pairs,
//! percent-decoded, `+` meaning a space. Integers are read leniently from
//! their leading digits, so `open=2x` still selects panel 2.

use url::form_urlencoded;

/// Value of the first `key` parameter in `fragment`.
///
/// A leading `#` is ignored.
#[must_use]
pub fn param(fragment: &str, key: &str) -> Option<String> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    form_urlencoded::parse(fragment.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Reads the integer at the start of `text`, ignoring what follows.
#[must_use]
pub fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Panel requested by `open=<index>`, if it names one of `panel_count` panels.
#[must_use]
pub fn requested_panel(fragment: &str, panel_count: usize) -> Option<usize> {
    let raw = param(fragment, "open")?;
    let index = leading_int(&raw)?;
    let index = usize::try_from(index).ok()?;
    (index < panel_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_parameter_selects_panel() {
        assert_eq!(requested_panel("open=2", 6), Some(2));
        assert_eq!(requested_panel("#open=0", 6), Some(0));
        assert_eq!(requested_panel("tab=x&open=5", 6), Some(5));
    }

    #[test]
    fn out_of_range_or_invalid_is_ignored() {
        assert_eq!(requested_panel("open=6", 6), None);
        assert_eq!(requested_panel("open=-1", 6), None);
        assert_eq!(requested_panel("open=abc", 6), None);
        assert_eq!(requested_panel("open=", 6), None);
        assert_eq!(requested_panel("", 6), None);
        assert_eq!(requested_panel("contato", 6), None);
    }

    #[test]
    fn integers_are_read_leniently() {
        assert_eq!(leading_int("2abc"), Some(2));
        assert_eq!(leading_int("  +3"), Some(3));
        assert_eq!(leading_int("x2"), None);
        assert_eq!(requested_panel("open=3.7", 6), Some(3));
    }

    #[test]
    fn first_occurrence_wins_and_values_are_decoded() {
        assert_eq!(param("open=1&open=4", "open").as_deref(), Some("1"));
        assert_eq!(param("q=a+b%21", "q").as_deref(), Some("a b!"));
        assert_eq!(param("flag", "flag").as_deref(), Some(""));
        assert_eq!(param("&&open%3D=x&open=2", "open").as_deref(), Some("2"));
    }
}
