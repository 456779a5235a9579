//! Prices
//!
//! The backend carries prices as plain numbers. Display goes through minor
//! units so rounding is decimal, not binary.

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso};
use thiserror::Error;

/// Errors raised while converting prices.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The value is not a number.
    #[error("invalid price: {0}")]
    Invalid(String),

    /// The value cannot be represented in minor units.
    #[error("price out of range: {0}")]
    OutOfRange(String),

    /// The ISO code is not a supported currency.
    #[error("unsupported currency: {0}")]
    UnknownCurrency(String),
}

/// Resolve an ISO 4217 code to a currency.
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for codes outside the supported set.
pub fn currency_from_code(code: &str) -> Result<&'static iso::Currency, PriceError> {
    match code.trim().to_ascii_uppercase().as_str() {
        "USD" => Ok(iso::USD),
        "GBP" => Ok(iso::GBP),
        "EUR" => Ok(iso::EUR),
        "CAD" => Ok(iso::CAD),
        "AUD" => Ok(iso::AUD),
        _ => Err(PriceError::UnknownCurrency(code.to_string())),
    }
}

/// Convert a wire price into minor units, rounding half away from zero.
///
/// # Errors
///
/// Returns [`PriceError::OutOfRange`] for non-finite or oversized values.
pub fn to_minor_units(price: f64) -> Result<i64, PriceError> {
    Decimal::from_f64(price)
        .and_then(|value| value.checked_mul(Decimal::new(100, 0)))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| PriceError::OutOfRange(price.to_string()))
}

/// Format a wire price in the given currency, e.g. `24.99` as `$24.99`.
///
/// # Errors
///
/// Returns [`PriceError::OutOfRange`] when the price cannot be converted.
pub fn format_price(price: f64, currency: &iso::Currency) -> Result<String, PriceError> {
    let minor = to_minor_units(price)?;

    Ok(Money::from_minor(minor, currency).to_string())
}

/// Format a price, falling back to two plain decimals when it cannot be
/// converted.
#[must_use]
pub fn display_price(price: f64, currency: &iso::Currency) -> String {
    format_price(price, currency).unwrap_or_else(|_| format!("{price:.2}"))
}

/// Parse a price typed by the user.
///
/// # Errors
///
/// Returns [`PriceError::Invalid`] when the input is not a finite number.
pub fn parse_price(input: &str) -> Result<f64, PriceError> {
    let trimmed = input.trim();

    let value: f64 = trimmed
        .parse()
        .map_err(|_err| PriceError::Invalid(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(PriceError::Invalid(trimmed.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn formats_usd_price_with_symbol() -> TestResult {
        assert_eq!(format_price(24.99, iso::USD)?, "$24.99");

        Ok(())
    }

    #[test]
    fn formats_gbp_price() -> TestResult {
        assert_eq!(format_price(12.5, iso::GBP)?, "£12.50");

        Ok(())
    }

    #[test]
    fn minor_units_round_decimal_values() -> TestResult {
        assert_eq!(to_minor_units(0.1 + 0.2)?, 30);
        assert_eq!(to_minor_units(19.999)?, 2000);

        Ok(())
    }

    #[test]
    fn non_finite_prices_are_out_of_range() {
        assert!(matches!(
            to_minor_units(f64::NAN),
            Err(PriceError::OutOfRange(_))
        ));
        assert_eq!(display_price(f64::INFINITY, iso::USD), "inf");
    }

    #[test]
    fn parses_user_input() -> TestResult {
        assert!((parse_price(" 9.99 ")? - 9.99).abs() < f64::EPSILON);

        assert!(matches!(parse_price("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(parse_price("NaN"), Err(PriceError::Invalid(_))));

        Ok(())
    }

    #[test]
    fn resolves_currency_codes_case_insensitively() -> TestResult {
        assert_eq!(currency_from_code("gbp")?, iso::GBP);
        assert!(matches!(
            currency_from_code("XYZ"),
            Err(PriceError::UnknownCurrency(_))
        ));

        Ok(())
    }
}
