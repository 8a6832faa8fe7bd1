use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a label that the server may send either as a string or a number
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Deserializes a float that may arrive as a JSON number or a numeric string
///
/// Thousands separators are stripped and the `B`/`M` suffixes used in volume
/// columns are expanded.
pub fn float_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => parse_scaled(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid number: {s}"))),
        other => Err(serde::de::Error::custom(format!(
            "expected number, got {other}"
        ))),
    }
}

/// Parses `"1,234.5"`, `"2.5B"` or `"340M"` into a plain float
#[must_use]
pub fn parse_scaled(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if let Some(value) = cleaned.strip_suffix('B') {
        return value.parse::<f64>().ok().map(|v| v * 1e9);
    }
    if let Some(value) = cleaned.strip_suffix('M') {
        return value.parse::<f64>().ok().map(|v| v * 1e6);
    }
    cleaned.parse::<f64>().ok()
}
