// ABOUTME: Scalar parsers turning noisy text fragments into currency, counts, decimals, and percents.
// ABOUTME: Every parser reads only the first numeric run and yields zero instead of failing.

//! Best-effort scalar parsers.
//!
//! Listing pages decorate numbers with currency symbols, thousands separators,
//! and units ("$1,250,000", "1,500 Sq Ft", "2.5 Baths"). These helpers find the
//! first numeric run in a fragment and parse it. Anything unparseable, including
//! overflow, becomes zero: a missing field is the normal case for scraped pages.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits with optional thousands separators, e.g. `1,250,000`.
static GROUPED_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());
/// Digits with an optional fractional part, e.g. `2.5`.
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap());
/// Signed decimal, e.g. `-3.2`.
static SIGNED_DECIMAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d[\d,]*(?:\.\d+)?").unwrap());

fn first_grouped_run(s: &str) -> Option<String> {
    GROUPED_DIGITS_RE
        .find(s)
        .map(|m| m.as_str().replace(',', ""))
}

/// Parse a currency amount in whole units. `"$1,250,000"` -> `1250000`.
///
/// Cents are ignored: `"$42.00"` -> `42`.
pub fn parse_currency(s: &str) -> u64 {
    first_grouped_run(s)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Parse an integer count. `"1,500 Sq Ft"` -> `1500`, `"3 Beds"` -> `3`.
pub fn parse_int(s: &str) -> u32 {
    first_grouped_run(s)
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

/// Parse a decimal count. `"2.5 Baths"` -> `2.5`.
pub fn parse_decimal(s: &str) -> f64 {
    DECIMAL_RE
        .find(s)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0.0)
}

/// Parse a percentage, keeping a leading sign. `"-3.2%"` -> `-3.2`.
pub fn parse_percent(s: &str) -> f64 {
    let normalized = s.replace('\u{2212}', "-");
    SIGNED_DECIMAL_RE
        .find(&normalized)
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_strips_symbols_and_separators() {
        assert_eq!(parse_currency("$1,250,000"), 1_250_000);
        assert_eq!(parse_currency("Sold for $42.00"), 42);
        assert_eq!(parse_currency("42"), 42);
        assert_eq!(parse_currency(""), 0);
        assert_eq!(parse_currency("Price upon request"), 0);
    }

    #[test]
    fn currency_uses_first_run_only() {
        assert_eq!(parse_currency("$950,000 was $1,100,000"), 950_000);
        // a lone separator before the digits is not a number
        assert_eq!(parse_currency(", $500"), 500);
    }

    #[test]
    fn currency_overflow_is_zero() {
        assert_eq!(parse_currency("99999999999999999999999"), 0);
    }

    #[test]
    fn int_parses_counts_with_units() {
        assert_eq!(parse_int("3 Beds"), 3);
        assert_eq!(parse_int("1,500 Sq Ft"), 1_500);
        assert_eq!(parse_int("Built 1962"), 1962);
        assert_eq!(parse_int("n/a"), 0);
    }

    #[test]
    fn decimal_keeps_fraction() {
        assert_eq!(parse_decimal("2.5 Baths"), 2.5);
        assert_eq!(parse_decimal("0.12 acres"), 0.12);
        assert_eq!(parse_decimal("2"), 2.0);
        assert_eq!(parse_decimal(""), 0.0);
    }

    #[test]
    fn percent_keeps_sign() {
        assert_eq!(parse_percent("-3.2%"), -3.2);
        assert_eq!(parse_percent("+4%"), 4.0);
        assert_eq!(parse_percent("\u{2212}1.5%"), -1.5);
        assert_eq!(parse_percent("12.5%"), 12.5);
        assert_eq!(parse_percent("flat"), 0.0);
    }

    #[test]
    fn parsers_are_idempotent_on_clean_values() {
        for raw in ["$42.00", "42", "USD 42"] {
            let once = parse_currency(raw);
            assert_eq!(parse_currency(&once.to_string()), once);
        }
        let once = parse_decimal("2.5 Baths");
        assert_eq!(parse_decimal(&once.to_string()), once);
        let once = parse_percent("-7.25% YoY");
        assert_eq!(parse_percent(&once.to_string()), once);
    }
}
