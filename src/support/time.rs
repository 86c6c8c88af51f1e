//! Time-of-day and pass timestamp parsing

use chrono::{NaiveDateTime, NaiveTime};

use crate::support::errors::ConfigError;

const TIME_OF_DAY_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const PASS_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, ConfigError> {
    let s = s.trim();
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| ConfigError::InvalidTime(s.to_string()))
}

/// Parse a pass timestamp such as `2024-08-29 08:00` or `2024-08-29T08:00:00`.
pub fn parse_pass_timestamp(s: &str) -> Result<NaiveDateTime, ConfigError> {
    let s = s.trim();
    PASS_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| ConfigError::InvalidTimestamp(s.to_string()))
}

/// Serde adapter for `NaiveTime` written as `HH:MM` in config files.
pub mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    use super::parse_time_of_day;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let time_str: String = String::deserialize(deserializer)?;
        parse_time_of_day(&time_str).map_err(D::Error::custom)
    }
}
