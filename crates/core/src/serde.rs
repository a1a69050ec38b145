//! Serde helper functions for lenient store decoding.
//!
//! The remote store is loose about encodings: record ids arrive as strings
//! or integers (Mongo-style `_id` or plain `id`), and epoch-millisecond
//! timestamps arrive as integers, floats, numeric strings, or null.
//! Unparseable timestamps must decode to `None` rather than fail the whole
//! record, so the transformer can degrade to empty date strings.

use serde::{Deserialize, Deserializer};

/// Raw id value as the store sends it: string or integer.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    String(String),
    Int(i64),
}

/// Raw timestamp value as the store sends it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMillis {
    Int(i64),
    Float(f64),
    String(String),
    Other(serde::de::IgnoredAny),
}

/// Deserialize an id that may be a string or an integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::String(s) => Ok(s),
        RawId::Int(n) => Ok(n.to_string()),
    }
}

/// Deserialize an optional epoch-millisecond timestamp.
///
/// Accepts integers, floats, and numeric strings. Null, missing, and
/// unparseable values all decode to `None`.
pub fn deserialize_optional_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<RawMillis> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(RawMillis::Int(n)) => Some(n),
        Some(RawMillis::Float(f)) if f.is_finite() => Some(f as i64),
        Some(RawMillis::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
