//! Boundary decoders for backend payloads.
//!
//! Bodies are parsed into a [`serde_json::Value`] first and then decoded into
//! the expected type, so list endpoints can keep the items that are well
//! formed and drop the rest.

use jiff::{Timestamp, civil, tz::TimeZone};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Result of checking one payload against its expected shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Valid(T),
    /// The payload did not have the expected shape; holds the reason.
    Invalid(String),
}

impl<T> Decoded<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn valid(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Decoded<T> {
    match serde_json::from_value(value) {
        Ok(decoded) => Decoded::Valid(decoded),
        Err(e) => Decoded::Invalid(e.to_string()),
    }
}

/// Decode every item separately.
pub fn decode_each<T: DeserializeOwned>(values: Vec<Value>) -> Vec<Decoded<T>> {
    values.into_iter().map(decode).collect()
}

/// Extract the items of a list body, which is either a bare array or an
/// object wrapping the array under `data`.
pub fn list_items(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(mut object) => match object.remove("data") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerLike {
    Integer(i64),
    Text(String),
}

/// Accept a JSON number or a string holding a finite number.
pub(crate) fn coerce_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(n) => Ok(n),
        NumberLike::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| {
                serde::de::Error::custom(format!("not a number: {text:?}"))
            }),
    }
}

/// Accept a JSON integer or a string holding an integer.
pub(crate) fn coerce_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntegerLike::deserialize(deserializer)? {
        IntegerLike::Integer(n) => Ok(n),
        IntegerLike::Text(text) => text.trim().parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("not an integer: {text:?}"))
        }),
    }
}

/// Accept an RFC 3339 timestamp, or a civil datetime without an offset which
/// is taken to be UTC.
pub(crate) fn lenient_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(timestamp) = text.parse::<Timestamp>() {
        return Ok(Some(timestamp));
    }
    let datetime = text
        .parse::<civil::DateTime>()
        .map_err(serde::de::Error::custom)?;
    datetime
        .to_zoned(TimeZone::UTC)
        .map(|zoned| Some(zoned.timestamp()))
        .map_err(serde::de::Error::custom)
}
