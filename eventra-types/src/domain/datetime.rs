//! Serde adapter for local date-times in the `yyyy-MM-dd'T'HH:mm:ss` shape.
//!
//! Payment dates and event start/end dates travel without offset and without
//! fractional seconds. Use with `#[serde(with = "local_datetime")]`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// chrono format string for the wire shape.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a local date-time, rejecting offsets and fractional seconds.
pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, FORMAT)
}

/// Formats a local date-time in the wire shape.
pub fn format(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT).to_string()
}

pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(dt))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(|e| D::Error::custom(format!("invalid date-time '{raw}': {e}")))
}
