//! RFC 3339 helpers.
//!
//! Response dates decode through chrono's serde support. Dates we send
//! (query parameters such as `since`, body fields such as `last_read_at`)
//! go through [`format_rfc3339`] so they always carry second precision and
//! a `Z` suffix.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a timestamp the way GitHub expects it in requests.
#[must_use]
pub fn format_rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// Returns `None` for anything chrono rejects.
#[must_use]
pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

/// Serialize an optional timestamp with [`format_rfc3339`].
pub mod option_rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        date: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&super::format_rfc3339(d)),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_zulu_and_seconds() {
        let date = Utc.with_ymd_and_hms(2015, 4, 28, 13, 38, 52).unwrap();
        assert_eq!(format_rfc3339(&date), "2015-04-28T13:38:52Z");
    }

    #[test]
    fn test_parse_offsets_normalize_to_utc() {
        let parsed = parse_rfc3339("2015-04-28T15:38:52+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2015, 4, 28, 13, 38, 52).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_rfc3339("yesterday").is_none());
        assert!(parse_rfc3339("2015-04-28").is_none());
    }
}
