//! Best-effort parsing of free-form `published` timestamps
//!
//! Feeds deliver RFC 2822 dates, ISO 8601 strings with or without offsets,
//! and plain dates. Anything that does not parse is reported as `None` and
//! scored in the lowest recency tier by the caller.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M%z",
    "%a, %d %b %Y %H:%M %z",
    "%d %b %Y %H:%M:%S %z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%B %d, %Y", "%b %d, %Y"];

/// A parsed publication time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedAt {
    /// Carries its own offset, compared in absolute time
    Zoned(DateTime<FixedOffset>),
    /// No offset, compared against the local wall clock
    Naive(NaiveDateTime),
}

impl PublishedAt {
    /// Parse a timestamp, `None` when no known format matches
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
            return Some(PublishedAt::Zoned(dt));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(PublishedAt::Zoned(dt));
        }
        if let Some(dt) = ZONED_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        {
            return Some(PublishedAt::Zoned(dt));
        }
        if let Some(dt) = NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Some(PublishedAt::Naive(dt));
        }

        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .map(|date| PublishedAt::Naive(date.and_time(NaiveTime::MIN)))
    }

    /// Hours elapsed between this timestamp and `now`
    ///
    /// Negative for timestamps in the future.
    pub fn hours_before(&self, now: &DateTime<Local>) -> f64 {
        let elapsed = match self {
            PublishedAt::Zoned(dt) => now.signed_duration_since(dt),
            PublishedAt::Naive(dt) => now.naive_local() - *dt,
        };
        elapsed.num_milliseconds() as f64 / 3_600_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_parses_rfc2822_with_zone_names() {
        assert!(matches!(
            PublishedAt::parse("Mon, 20 Oct 2025 08:30:00 GMT"),
            Some(PublishedAt::Zoned(_))
        ));
        assert!(matches!(
            PublishedAt::parse("Mon, 20 Oct 2025 08:30:00 +0900"),
            Some(PublishedAt::Zoned(_))
        ));
    }

    #[test]
    fn test_parses_iso_variants() {
        assert!(matches!(
            PublishedAt::parse("2025-10-20T08:30:00Z"),
            Some(PublishedAt::Zoned(_))
        ));
        assert!(matches!(
            PublishedAt::parse("2025-10-20T08:30:00.123+09:00"),
            Some(PublishedAt::Zoned(_))
        ));
        assert!(matches!(
            PublishedAt::parse("2025-10-20 08:30:00+0000"),
            Some(PublishedAt::Zoned(_))
        ));
        assert!(matches!(
            PublishedAt::parse("2025-10-20T08:30:00"),
            Some(PublishedAt::Naive(_))
        ));
        assert!(matches!(
            PublishedAt::parse("2025/10/20 08:30"),
            Some(PublishedAt::Naive(_))
        ));
    }

    #[test]
    fn test_date_only_is_midnight() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 20)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(
            PublishedAt::parse("2025-10-20"),
            Some(PublishedAt::Naive(expected))
        );
        assert_eq!(
            PublishedAt::parse("October 20, 2025"),
            Some(PublishedAt::Naive(expected))
        );
        assert_eq!(
            PublishedAt::parse("20 Oct 2025"),
            Some(PublishedAt::Naive(expected))
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(PublishedAt::parse(""), None);
        assert_eq!(PublishedAt::parse("   "), None);
        assert_eq!(PublishedAt::parse("yesterday-ish"), None);
        assert_eq!(PublishedAt::parse("2025-13-45"), None);
    }

    #[test]
    fn test_hours_before_zoned_uses_absolute_time() {
        let now = Utc
            .with_ymd_and_hms(2025, 10, 20, 12, 0, 0)
            .unwrap()
            .with_timezone(&Local);
        // 18:00 at +09:00 is 09:00 UTC, three hours before now
        let published = PublishedAt::parse("2025-10-20T18:00:00+09:00").unwrap();
        assert!((published.hours_before(&now) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hours_before_naive_uses_local_clock() {
        let now = Local::now();
        let raw = (now.naive_local() - Duration::hours(50))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let hours = PublishedAt::parse(&raw).unwrap().hours_before(&now);
        assert!((hours - 50.0).abs() < 0.01);
    }

    #[test]
    fn test_future_timestamp_is_negative() {
        let now = Local::now();
        let published = PublishedAt::Zoned((now + Duration::hours(2)).fixed_offset());
        assert!(published.hours_before(&now) < 0.0);
    }
}
