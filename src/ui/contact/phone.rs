// SPDX-License-Identifier: MPL-2.0
//! Brazilian WhatsApp number mask.
//!
//! `75991804444` is shown as `(75) 99180-4444`. The mask is applied on every
//! keystroke, so it must accept its own output as input.

/// Keeps the ASCII digits of `raw`.
#[must_use]
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats whatever digits `raw` holds as `(DD) NNNNN-NNNN`.
#[must_use]
pub fn mask(raw: &str) -> String {
    let digits = digits(raw);
    let mut formatted = if digits.len() > 2 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    };
    if formatted.len() > 10 {
        let tail_end = formatted.len().min(15);
        formatted = format!("{}-{}", &formatted[..10], &formatted[10..tail_end]);
    }
    formatted
}

/// Whether the number carries at least `min_digits` digits (area code included).
#[must_use]
pub fn has_min_digits(raw: &str, min_digits: usize) -> bool {
    digits(raw).len() >= min_digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_number_is_fully_formatted() {
        assert_eq!(mask("75991804444"), "(75) 99180-4444");
    }

    #[test]
    fn partial_input_is_formatted_progressively() {
        assert_eq!(mask("7"), "7");
        assert_eq!(mask("75"), "75");
        assert_eq!(mask("759"), "(75) 9");
        assert_eq!(mask("7599180"), "(75) 99180");
        assert_eq!(mask("75991804"), "(75) 99180-4");
    }

    #[test]
    fn mask_is_stable_on_its_own_output() {
        let once = mask("75991804444");
        assert_eq!(mask(&once), once);
    }

    #[test]
    fn tail_keeps_at_most_five_characters() {
        assert_eq!(mask("7599180444455"), "(75) 99180-44445");
    }

    #[test]
    fn letters_and_symbols_are_ignored() {
        assert_eq!(mask("+55 (75) abc"), "(55) 75");
        assert_eq!(digits("(75) 99180-4444"), "75991804444");
    }

    #[test]
    fn minimum_digit_count_includes_area_code() {
        assert!(has_min_digits("(75) 9918-0444", 10));
        assert!(!has_min_digits("99180-444", 10));
    }
}
