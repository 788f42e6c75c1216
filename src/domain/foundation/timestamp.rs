//! Timestamp value object for immutable points in time.
//!
//! Backend payloads carry times as RFC 3339 strings, as `YYYY-MM-DD HH:MM:SS`
//! without an offset, or as bare dates. All three parse into a UTC instant.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses any of the time formats the backend emits.
    ///
    /// Returns `None` for blank or unrecognised text.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(Self(naive.and_utc()));
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Formats as `YYYY-MM-DD`.
    pub fn format_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Formats as `YYYY-MM-DD HH:MM:SS`.
    pub fn format_datetime(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp '{}'", raw)))
    }
}

/// Deserializes an optional timestamp, treating null, blank and unparseable
/// values as absent.
///
/// Use with `#[serde(default, deserialize_with = "lenient_timestamp")]`.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Timestamp::parse(&s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn parse_accepts_rfc3339() {
        let ts = Timestamp::parse("2024-01-15T10:30:00+08:00").unwrap();
        assert_eq!(ts.as_datetime().hour(), 2);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn parse_accepts_naive_datetime() {
        let ts = Timestamp::parse("2024-03-01 08:05:09").unwrap();
        assert_eq!(ts.format_datetime(), "2024-03-01 08:05:09");
    }

    #[test]
    fn parse_accepts_bare_date() {
        let ts = Timestamp::parse("2024-03-01").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.format_date(), "2024-03-01");
    }

    #[test]
    fn parse_rejects_blank_and_garbage() {
        assert!(Timestamp::parse("").is_none());
        assert!(Timestamp::parse("   ").is_none());
        assert!(Timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn is_before_compares_instants() {
        let earlier = Timestamp::parse("2024-01-01").unwrap();
        let later = Timestamp::parse("2024-01-02").unwrap();
        assert!(earlier.is_before(&later));
        assert!(!later.is_before(&earlier));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let ts: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(ts.as_datetime().year(), 2024);
    }

    #[test]
    fn timestamp_rejects_unparseable_json() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"soon\"");
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient_timestamp")]
        at: Option<Timestamp>,
    }

    #[test]
    fn lenient_timestamp_treats_bad_values_as_absent() {
        let h: Holder = serde_json::from_str(r#"{"at": "nonsense"}"#).unwrap();
        assert!(h.at.is_none());
        let h: Holder = serde_json::from_str(r#"{"at": 17}"#).unwrap();
        assert!(h.at.is_none());
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(h.at.is_none());
        let h: Holder = serde_json::from_str(r#"{"at": "2024-05-06"}"#).unwrap();
        assert_eq!(h.at.unwrap().format_date(), "2024-05-06");
    }
}
