use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};

/// Times of day on the wire: 24-hour `HH:mm`.
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(raw: &str) -> ParseResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
}

pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Combine a calendar date and a time of day into a local timestamp.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Serde adapter for `NaiveTime` fields carried as `HH:mm`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(|e| {
            serde::de::Error::custom(format!("invalid time '{}', expected HH:mm: {}", raw, e))
        })
    }
}
