//! Serde helpers for the data files' human-readable timestamps.
//!
//! The data files store timestamps as local-time strings like
//! `07/15/2025 03:41:09 PM`; these modules keep that on-disk shape while the
//! models work with [`chrono`] values.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Timestamp format used across all three data files.
pub const FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

fn parse(s: &str) -> Result<DateTime<Local>, String> {
    let naive = NaiveDateTime::parse_from_str(s, FORMAT)
        .map_err(|err| format!("invalid timestamp `{s}`: {err}"))?;

    // DST transitions can make a local wall-clock time ambiguous or missing;
    // take the earliest valid interpretation.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("timestamp `{s}` does not exist in the local timezone"))
}

/// `#[serde(with = "timestamp::required")]` for `DateTime<Local>` fields.
pub mod required {
    use super::{DateTime, Deserialize, Deserializer, FORMAT, Local, Serializer, de, parse};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Local>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Local>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "timestamp::optional")]` for `Option<DateTime<Local>>`
/// fields (the seeded admin account has no registration date).
pub mod optional {
    use super::{DateTime, Deserialize, Deserializer, FORMAT, Local, Serializer, de, parse};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Local>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.collect_str(&ts.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Local>>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| parse(&s).map_err(de::Error::custom)).transpose()
    }
}
