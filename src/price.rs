//! Normalisation of raw price-range text into the display form used by the
//! website.
//!
//! Input cells arrive in loose shapes such as `P1070000 - P1140000`,
//! `1070000-1140000`, `₱2,500,000.50`, or `Price on Request`. The formatter
//! rewrites every numeric segment with a peso glyph and thousands grouping
//! and joins range endpoints with an en-dash. Text it cannot parse degrades
//! to passthrough; formatting never fails and performs no I/O.

use std::fmt;

const PESO: char = '₱';
const PRICE_ON_REQUEST: &str = "Price on Request";
const RANGE_SEPARATOR: &str = " – ";

/// Outcome of normalising one raw price cell.
///
/// Both variants render as plain text; the distinction exists so the degrade
/// path is observable on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceText {
    /// The input was rewritten into canonical peso notation.
    Formatted(String),
    /// The input could not be parsed numerically; the trimmed original text
    /// is kept unchanged.
    Passthrough(String),
}

impl PriceText {
    pub fn as_str(&self) -> &str {
        match self {
            PriceText::Formatted(text) | PriceText::Passthrough(text) => text,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            PriceText::Formatted(text) | PriceText::Passthrough(text) => text,
        }
    }
}

impl fmt::Display for PriceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalises a raw price or price-range string.
///
/// Empty input yields an empty `Formatted` value. Any mention of "request"
/// (case-insensitive) short-circuits to the literal `Price on Request`
/// phrase, ignoring numeric content. Otherwise the input is split on single
/// hyphens or en-dashes and each segment is rewritten; if any segment has no
/// digits or fails to parse, the whole trimmed input is returned as
/// [`PriceText::Passthrough`].
pub fn format_price_range(raw: &str) -> PriceText {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PriceText::Formatted(String::new());
    }

    if trimmed.to_lowercase().contains("request") {
        return PriceText::Formatted(PRICE_ON_REQUEST.to_string());
    }

    let mut segments = Vec::new();
    for segment in trimmed.split(['-', '–']) {
        match format_segment(segment.trim()) {
            Some(text) => segments.push(text),
            None => return PriceText::Passthrough(trimmed.to_string()),
        }
    }

    PriceText::Formatted(segments.join(RANGE_SEPARATOR))
}

/// Rewrites a single price segment, or `None` when it cannot be parsed.
fn format_segment(segment: &str) -> Option<String> {
    let numeric: String = segment
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if numeric.is_empty() {
        return None;
    }

    let grouped = if numeric.contains('.') {
        let value: f64 = numeric.parse().ok()?;
        group_decimal(value)
    } else {
        let value: u64 = numeric.parse().ok()?;
        group_digits(&value.to_string())
    };

    Some(format!("{PESO}{grouped}"))
}

/// Renders a fractional value with exactly two decimal digits and a grouped
/// integer part.
fn group_decimal(value: f64) -> String {
    let rendered = format!("{value:.2}");
    match rendered.split_once('.') {
        Some((whole, fraction)) => format!("{}.{fraction}", group_digits(whole)),
        None => group_digits(&rendered),
    }
}

/// Inserts a comma every three digits, counting from the right.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefixed_range() {
        assert_eq!(
            format_price_range("P1070000 - P1140000").as_str(),
            "₱1,070,000 – ₱1,140,000"
        );
    }

    #[test]
    fn formats_bare_range_without_spaces() {
        assert_eq!(
            format_price_range("1070000-1140000").as_str(),
            "₱1,070,000 – ₱1,140,000"
        );
    }

    #[test]
    fn formats_range_written_with_an_en_dash() {
        assert_eq!(
            format_price_range("P1070000 – P1140000").as_str(),
            "₱1,070,000 – ₱1,140,000"
        );
    }

    #[test]
    fn formats_single_value() {
        assert_eq!(format_price_range("P1070000").as_str(), "₱1,070,000");
    }

    #[test]
    fn preserves_two_decimal_digits() {
        assert_eq!(
            format_price_range("₱2,500,000.50"),
            PriceText::Formatted("₱2,500,000.50".to_string())
        );
    }

    #[test]
    fn pads_single_decimal_digit_to_two() {
        assert_eq!(format_price_range("1500000.5").as_str(), "₱1,500,000.50");
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_price_range("5").as_str(), "₱5");
        assert_eq!(format_price_range("500").as_str(), "₱500");
        assert_eq!(format_price_range("1000").as_str(), "₱1,000");
        assert_eq!(format_price_range("1234567").as_str(), "₱1,234,567");
    }

    #[test]
    fn recognises_price_on_request_case_insensitively() {
        assert_eq!(
            format_price_range("Price on Request").as_str(),
            "Price on Request"
        );
        assert_eq!(
            format_price_range("price ON request").as_str(),
            "Price on Request"
        );
        assert_eq!(
            format_price_range("P999 on request").as_str(),
            "Price on Request"
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_price_range(""), PriceText::Formatted(String::new()));
        assert_eq!(format_price_range("   "), PriceText::Formatted(String::new()));
    }

    #[test]
    fn text_without_digits_passes_through() {
        assert_eq!(
            format_price_range("TBD"),
            PriceText::Passthrough("TBD".to_string())
        );
    }

    #[test]
    fn malformed_decimal_passes_the_whole_input_through() {
        assert_eq!(
            format_price_range("1.2.3 - 2000"),
            PriceText::Passthrough("1.2.3 - 2000".to_string())
        );
    }

    #[test]
    fn adjacent_dashes_pass_through() {
        // A double dash yields an empty middle segment, which cannot be
        // parsed, so the whole input is kept.
        assert_eq!(
            format_price_range("1000--2000"),
            PriceText::Passthrough("1000--2000".to_string())
        );
    }

    #[test]
    fn passthrough_is_trimmed() {
        assert_eq!(format_price_range("  TBD  ").as_str(), "TBD");
    }

    #[test]
    fn stray_currency_marks_are_stripped_before_parsing() {
        assert_eq!(format_price_range("₱1,070,000").as_str(), "₱1,070,000");
        assert_eq!(format_price_range("PHP 850000").as_str(), "₱850,000");
    }
}
