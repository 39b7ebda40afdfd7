use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid log date: `{0}`")]
pub struct DateParseError(pub String);

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a log date, keeping only the calendar day.
///
/// Accepts plain dates (`2025-01-31`, `2025/01/31`), naive timestamps with a
/// `T` or space separator, and RFC 3339 timestamps. Time of day and offsets
/// are dropped.
pub fn parse_log_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let value = value.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    if let Ok(time) = value.parse::<NaiveDateTime>() {
        return Ok(time.date());
    }

    if let Ok(time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(time.date());
    }

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.date_naive());
    }

    Err(DateParseError(value.to_owned()))
}

pub(crate) mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_log_date(&raw).map_err(D::Error::custom)
    }
}
