//! Parsing of free-form user input
//!
//! Income fields accept whatever the user types or pastes ("1.234.567",
//! "$ 2,000,000", "1500000"). Computation only ever sees the digits; the
//! helpers here also cover the lenient validity check used for field styling
//! and the live normalization applied while typing or pasting.

use crate::models::money::group_thousands;
use crate::models::Money;

/// Parse a locale-formatted amount into whole pesos
///
/// Every non-digit character is discarded (thousands separators, currency
/// symbols, decimal points). Empty input, or input without digits, is 0.
/// Never fails; values beyond `u64::MAX` saturate.
pub fn parse_amount(raw: &str) -> u64 {
    raw.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d))
        })
}

/// Parse an amount straight into [`Money`]
pub fn parse_money(raw: &str) -> Money {
    Money::from_pesos(parse_amount(raw))
}

/// Lenient validity check for an income field
///
/// Keeps digits, `.` and `-`, reads the longest leading decimal number and
/// reports whether it is strictly positive. Only used for feedback styling;
/// computation is gated on [`parse_amount`] instead.
pub fn is_valid_number(raw: &str) -> bool {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    leading_float(&kept).is_some_and(|n| n > 0.0)
}

fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            end = frac_start;
        }
    }

    if !has_digits {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Normalize an income field while the user types
///
/// Only digits and commas survive, runs of commas collapse to one and a
/// leading comma is dropped. Values longer than three characters are
/// re-rendered with es-CO thousands grouping.
pub fn sanitize_income_input(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() {
            cleaned.push(c);
        } else if c == ',' && !cleaned.ends_with(',') {
            cleaned.push(c);
        }
    }
    let cleaned = cleaned.strip_prefix(',').unwrap_or(&cleaned).to_string();

    if cleaned.len() > 3 {
        group_thousands(parse_amount(&cleaned))
    } else {
        cleaned
    }
}

/// Normalize pasted text into a grouped amount, or `None` if it has no digits
pub fn normalize_pasted(raw: &str) -> Option<String> {
    if raw.chars().any(|c| c.is_ascii_digit()) {
        Some(group_thousands(parse_amount(raw)))
    } else {
        None
    }
}

/// Parse a percentage field the way a lenient integer prompt does
///
/// Leading whitespace and an optional `+` are skipped, then the leading run
/// of digits is read. Anything else, including a negative sign, yields 0.
pub fn parse_percentage(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    unsigned
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_separators() {
        assert_eq!(parse_amount("1.234.567"), 1_234_567);
        assert_eq!(parse_amount("1,234,567"), 1_234_567);
        assert_eq!(parse_amount("1234567"), 1_234_567);
        assert_eq!(parse_amount("$ 2.000.000 COP"), 2_000_000);
    }

    #[test]
    fn test_parse_amount_empty() {
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("  "), 0);
        assert_eq!(parse_amount("abc"), 0);
    }

    #[test]
    fn test_parse_amount_discards_decimals() {
        // There are no sub-peso amounts; the decimal point is just noise.
        assert_eq!(parse_amount("1500.50"), 150_050);
    }

    #[test]
    fn test_parse_amount_saturates() {
        assert_eq!(parse_amount("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("2.000.000"), Money::from_pesos(2_000_000));
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("2000000"));
        assert!(is_valid_number("$1.234.567"));
        assert!(is_valid_number("0.5"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("0"));
        assert!(!is_valid_number("-200"));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("."));
    }

    #[test]
    fn test_sanitize_income_input() {
        assert_eq!(sanitize_income_input("123"), "123");
        assert_eq!(sanitize_income_input("1234"), "1.234");
        assert_eq!(sanitize_income_input("1.234.5678"), "12.345.678");
        assert_eq!(sanitize_income_input("12a"), "12");
        assert_eq!(sanitize_income_input(",,5"), "5");
        assert_eq!(sanitize_income_input("1,,2"), "1,2");
        assert_eq!(sanitize_income_input(""), "");
    }

    #[test]
    fn test_normalize_pasted() {
        assert_eq!(normalize_pasted("$ 2,500,000").as_deref(), Some("2.500.000"));
        assert_eq!(normalize_pasted("salario"), None);
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("50"), 50);
        assert_eq!(parse_percentage(" 30%"), 30);
        assert_eq!(parse_percentage("+20"), 20);
        assert_eq!(parse_percentage("12abc"), 12);
        assert_eq!(parse_percentage(""), 0);
        assert_eq!(parse_percentage("-10"), 0);
        assert_eq!(parse_percentage("abc"), 0);
    }
}
