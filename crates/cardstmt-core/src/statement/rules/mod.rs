//! Extraction primitives shared by every statement template.

pub mod patterns;

use regex::Regex;

use patterns::{CR_MARKER, LEADING_CURRENCY};

/// Normalize an amount string without parsing it.
///
/// Converts a unicode minus sign to ASCII, strips leading currency markers
/// (`₹`, `$`, the OCR artifact `r`) and removes a `CR` marker together with
/// its leading whitespace. Digit grouping and decimals are kept as-is.
pub fn clean_amount(raw: &str) -> String {
    let s = raw.trim().replace('\u{2212}', "-");
    let s = LEADING_CURRENCY.replace(&s, "");
    CR_MARKER.replace_all(&s, "").trim_end().to_string()
}

/// Last four digits of a (possibly masked) card or account number block.
///
/// Every non-digit character is ignored, so `4375 XXXX XXXX 8007` yields
/// `8007`. Blocks with fewer than four digits yield `None`.
pub fn last4_from_number_block(block: &str) -> Option<String> {
    let digits: Vec<char> = block.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return None;
    }
    Some(digits[digits.len() - 4..].iter().collect())
}

/// Find a value within `window` characters after the first match of `label`.
///
/// Only the bounded window is searched, so a value belonging to a later
/// field is never picked up. Returns the trimmed first capture group of
/// `value`.
pub fn find_value_after_label(text: &str, label: &Regex, value: &Regex, window: usize) -> Option<String> {
    let label_match = label.find(text)?;
    let rest = &text[label_match.end()..];

    let end = rest
        .char_indices()
        .nth(window)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let snippet = &rest[..end];

    value
        .captures(snippet)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trimmed first capture group of the first match.
pub fn capture_first(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Trimmed first capture group of the last match.
pub fn capture_last(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
