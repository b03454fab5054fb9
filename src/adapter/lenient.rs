//! Serde helpers for numeric fields the venues encode inconsistently.
//!
//! A field may arrive as a JSON number, a numeric string, null, or be missing
//! altogether. All of those deserialize; anything unparsable becomes zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::parse_lenient;

/// Deserialize a decimal from a number, a string, or null.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(Decimal::ZERO, value_to_decimal))
}

/// Deserialize a decimal that may be unset. Missing, null, an empty string
/// or a numeric zero is `None`; any other value is parsed leniently, so a
/// string such as `"0"` is `Some(0)`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null | Value::Bool(false)) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(other) => Some(value_to_decimal(&other)),
    })
}

/// Deserialize an integer from a number or a numeric string. Missing is `None`.
pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Deserialize a string, accepting numbers and treating null as empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

pub(crate) fn value_to_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_lenient(&n.to_string()),
        Value::String(s) => parse_lenient(s),
        _ => Decimal::ZERO,
    }
}
