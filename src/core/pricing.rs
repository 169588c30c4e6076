//! Market price parsing and currency conversion.
//!
//! Market prices arrive as display strings (`"$2.50"`, `"$1,234.56"`). They are parsed as
//! USD, converted at the invocation's exchange rate and rounded to cents before being
//! added to the running total, so the total always equals the sum of the shown labels.

use crate::errors::{Error, Result};

/// Parses a USD market price string into a number.
///
/// Leading currency symbols and whitespace are skipped, thousands separators are
/// dropped, and anything after the number (e.g. a trailing `USD`) is ignored.
///
/// # Errors
/// Returns `Error::PriceParse` when no number can be read.
pub fn parse_usd_price(raw: &str) -> Result<f64> {
    let number: String = raw
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.')
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    number
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| Error::PriceParse {
            raw: raw.to_string(),
        })
}

/// Rounds to two decimal places, halves away from zero.
#[must_use]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Converts a USD amount at `rate` and rounds to cents.
#[must_use]
pub fn convert(usd: f64, rate: f64) -> f64 {
    round_to_cents(usd * rate)
}

/// Formats a converted amount for display, e.g. `"102.50 UAH"`.
#[must_use]
pub fn format_price_label(amount: f64, currency_label: &str) -> String {
    format!("{amount:.2} {currency_label}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_plain_dollar_price() {
        assert_eq!(parse_usd_price("$2.50").unwrap(), 2.5);
        assert_eq!(parse_usd_price("$0.03").unwrap(), 0.03);
    }

    #[test]
    fn test_parse_price_with_separators_and_suffix() {
        assert_eq!(parse_usd_price("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_usd_price("$7.10 USD").unwrap(), 7.1);
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(matches!(
            parse_usd_price("free"),
            Err(Error::PriceParse { .. })
        ));
        assert!(parse_usd_price("").is_err());
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        assert_eq!(convert(2.5, 41.0), 102.5);
        assert_eq!(convert(0.33, 41.37), 13.65);
        assert_eq!(round_to_cents(1.005_1), 1.01);
    }

    #[test]
    fn test_price_label_matches_rounded_conversion() {
        let rate = 40.5;
        let label = format_price_label(convert(parse_usd_price("$2.50").unwrap(), rate), "UAH");
        assert_eq!(label, format!("{:.2} UAH", round_to_cents(2.5 * rate)));
        assert_eq!(label, "101.25 UAH");
    }
}
