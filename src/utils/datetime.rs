//! Serde helpers for `dateOfJoin`, which clients send either as a bare
//! ISO date (`2024-01-01`), as a naive ISO date-time, or as an RFC 3339
//! timestamp with `Z` or an offset (stored as UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc());
    }
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => Ok(dt),
        Err(_) => match NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
            Ok(dt) => Ok(dt),
            Err(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| date.and_time(chrono::NaiveTime::MIN)),
        },
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse(&raw).map(Some).map_err(de::Error::custom),
        None => Ok(None),
    }
}
