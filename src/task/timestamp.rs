//! `createdAt` / `updatedAt` encoding.
//!
//! Timestamps are written as RFC 3339 in UTC with microsecond precision.
//! Older database files hold naive local times such as
//! `2024-11-02T09:15:42.918273`; those are read in the local time zone.

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub(crate) fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{raw}`")))
}

pub(crate) fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT).ok()?;
    // Ambiguous local times (DST fold) resolve to the earlier instant.
    Local.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc))
}
