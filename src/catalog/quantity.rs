//! Numeric-with-unit catalog values
//!
//! The catalog writes sizes and rates as strings like `"24 GB"` or
//! `"1792 GB/s"`, and core counts as `"32-core"`. Only the leading integer
//! carries meaning; the unit suffix is discarded.

use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A raw catalog value whose leading integer is the quantity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(String);

impl Quantity {
    /// Wrap a raw catalog string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The value as authored, unit suffix included
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Parse the leading integer, naming `field` in the error
    pub fn value(&self, field: &'static str) -> Result<u32, FieldError> {
        parse_leading_u32(&self.0).ok_or_else(|| FieldError::malformed(field, self.0.as_str()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Quantity {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Authors sometimes write bare numbers (`"cpu": 24`). Anything else
        // is kept as its JSON text and rejected when the record is projected.
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Quantity(s),
            other => Quantity(other.to_string()),
        })
    }
}

/// A text or price leaf kept as authored.
///
/// Type checks happen when a record is projected, so a wrongly typed value
/// drops only its own record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValue(Value);

impl FieldValue {
    /// The value as a string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// The value as text, or a malformed-field error
    pub fn text(&self, field: &'static str) -> Result<&str, FieldError> {
        self.0
            .as_str()
            .ok_or_else(|| FieldError::malformed(field, self.0.to_string()))
    }

    /// The value as a whole, non-negative amount
    pub fn amount(&self, field: &'static str) -> Result<u32, FieldError> {
        let amount = match &self.0 {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        amount.ok_or_else(|| FieldError::malformed(field, self.0.to_string()))
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self(Value::from(text))
    }
}

impl From<u32> for FieldValue {
    fn from(amount: u32) -> Self {
        Self(Value::from(amount))
    }
}

/// Parse the leading run of ASCII digits, skipping leading whitespace.
///
/// Returns `None` when there are no digits (a leading sign counts as no
/// digits) or the value does not fit in `u32`.
pub fn parse_leading_u32(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_u32() {
        assert_eq!(parse_leading_u32("24 GB"), Some(24));
        assert_eq!(parse_leading_u32("1792 GB/s"), Some(1792));
        assert_eq!(parse_leading_u32("512GB"), Some(512));
        assert_eq!(parse_leading_u32("  32-core"), Some(32));
        assert_eq!(parse_leading_u32("1.8 TB/s"), Some(1));
        assert_eq!(parse_leading_u32("0"), Some(0));
    }

    #[test]
    fn test_parse_leading_u32_rejects() {
        assert_eq!(parse_leading_u32(""), None);
        assert_eq!(parse_leading_u32("GB"), None);
        assert_eq!(parse_leading_u32("-8 GB"), None);
        assert_eq!(parse_leading_u32("99999999999 GB"), None);
    }

    #[test]
    fn test_quantity_from_number_or_string() {
        let q: Quantity = serde_json::from_str("24").unwrap();
        assert_eq!(q.value("cpu").unwrap(), 24);

        let q: Quantity = serde_json::from_str("\"80-core\"").unwrap();
        assert_eq!(q.raw(), "80-core");
        assert_eq!(q.value("gpu").unwrap(), 80);
    }

    #[test]
    fn test_quantity_keeps_wrong_types_for_projection() {
        let q: Quantity = serde_json::from_str("true").unwrap();
        assert_eq!(q.value("memoryBandwidth").unwrap_err().field(), "memoryBandwidth");

        let q: Quantity = serde_json::from_str(r#"{"gb": 24}"#).unwrap();
        assert!(q.value("vram").is_err());
    }

    #[test]
    fn test_field_value_amount() {
        let v: FieldValue = serde_json::from_str("1999").unwrap();
        assert_eq!(v.amount("price").unwrap(), 1999);

        let v: FieldValue = serde_json::from_str("\"749\"").unwrap();
        assert_eq!(v.amount("price").unwrap(), 749);

        for bad in ["449.99", "-1", "true", "\"cheap\"", "[1]"] {
            let v: FieldValue = serde_json::from_str(bad).unwrap();
            assert_eq!(v.amount("price"), Err(FieldError::malformed("price", bad)));
        }
    }

    #[test]
    fn test_field_value_text() {
        let v = FieldValue::from("RTX 4090");
        assert_eq!(v.text("name").unwrap(), "RTX 4090");
        assert_eq!(
            FieldValue::from(4090).text("name"),
            Err(FieldError::malformed("name", "4090"))
        );
    }

    #[test]
    fn test_quantity_malformed_names_field() {
        let q = Quantity::new("n/a");
        let err = q.value("memoryBandwidth").unwrap_err();
        assert_eq!(err, FieldError::malformed("memoryBandwidth", "n/a"));
    }
}
