//! Time-of-day values as exchanged with the booking service ("HH:MM:SS")

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M:%S";

/// Parse a booking slot boundary.
///
/// Accepts `HH:MM:SS` and `HH:MM`. `24:00:00` is read as the last instant of
/// the day.
pub fn parse(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if value == "24:00:00" || value == "24:00" {
        return NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999);
    }
    NaiveTime::parse_from_str(value, FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

pub fn format(time: &NaiveTime) -> String {
    time.format(FORMAT).to_string()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(time))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid time of day '{}'", raw)))
}

/// Nullable variant for fields the booking service may omit or send as null
pub mod optional {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day '{}'", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!(parse("09:30:00"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse("08:00"), NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(parse(" 13:00:00 "), NaiveTime::from_hms_opt(13, 0, 0));
        assert!(parse("noon").is_none());
    }

    #[test]
    fn test_end_of_day() {
        let end = parse("24:00:00").unwrap();
        assert!(end > NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(format(&end), "23:59:59");
    }
}
