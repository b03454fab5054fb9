//! Monetary types for price and volume representation.
//!
//! Opinion encodes every numeric field as a string, and either venue may send
//! nulls or garbage. [`parse_lenient`] is the single place those values are
//! turned into decimals: anything that does not parse becomes zero.

use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Volume represented as a Decimal for precision.
pub type Volume = Decimal;

/// Cents per dollar, used to express probabilities as prices.
pub const CENTS_PER_DOLLAR: Decimal = Decimal::ONE_HUNDRED;

/// Parse a numeric string, treating empty or unparsable input as zero.
///
/// Accepts plain decimals (`"0.835"`), scientific notation (`"1e-3"`), and
/// anything `f64` understands as a last resort. Non-finite values are zero.
#[must_use]
pub fn parse_lenient(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    if let Ok(value) = Decimal::from_str(trimmed) {
        return value;
    }
    if let Ok(value) = Decimal::from_scientific(trimmed) {
        return value;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO)
}

/// Convert a float back into a decimal, saturating at the representable range.
///
/// NaN maps to zero.
#[must_use]
pub fn saturating_from_f64(value: f64) -> Decimal {
    if value.is_nan() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(if value > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Divide, saturating at the representable range. Division by zero is zero.
#[must_use]
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    )
}

/// Lossy conversion used where the math leaves decimal territory (powers).
#[must_use]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
