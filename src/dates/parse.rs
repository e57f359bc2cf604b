use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::{debug, warn};

use super::key::DateKey;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const EPOCH_MILLIS_MIN_DIGITS: usize = 10;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Parse any supported date representation into an instant
///
/// Strings without an offset are read as UTC wall time. A bare four-digit
/// year means January 1st, eight digits are `YYYYMMDD`, and runs of ten or
/// more digits are epoch milliseconds.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    parse_with_offset(raw)
        .or_else(|| parse_naive_datetime(raw))
        .or_else(|| parse_naive_date(raw))
        .or_else(|| parse_digits(raw))
}

/// Convert a raw date string into its canonical day key
///
/// `YYYY-MM-DD` passes through unchanged. For anything containing a `T`
/// separator the text before the first `T` is the day, taken verbatim. All
/// other inputs are parsed and reduced to their UTC calendar fields.
pub fn to_date_key(raw: &str) -> Option<DateKey> {
    let raw = raw.trim();
    if raw.is_empty() {
        debug!("to_date_key: empty input");
        return None;
    }

    if DateKey::looks_canonical(raw) {
        return DateKey::parse_canonical(raw);
    }

    if let Some((date_part, _)) = raw.split_once('T') {
        if let Some(key) = DateKey::parse_canonical(date_part) {
            return Some(key);
        }
    }

    match parse_instant(raw) {
        Some(instant) => DateKey::from_naive(instant.date_naive()),
        None => {
            warn!("to_date_key: unparseable date '{}'", raw);
            None
        }
    }
}

// --- Parsing Helpers ---

fn parse_with_offset(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

fn parse_naive_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn parse_naive_date(raw: &str) -> Option<DateTime<Utc>> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Digit-only input: `YYYY`, compact `YYYYMMDD`, or epoch milliseconds
///
/// Any other digit run is rejected.
fn parse_digits(raw: &str) -> Option<DateTime<Utc>> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let date = match (raw.len(), digits.len()) {
        (4, 4) => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        (8, 8) => NaiveDate::from_ymd_opt(
            raw[..4].parse().ok()?,
            raw[4..6].parse().ok()?,
            raw[6..].parse().ok()?,
        ),
        (_, len) if len >= EPOCH_MILLIS_MIN_DIGITS => {
            return raw.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis);
        }
        _ => None,
    };

    date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Option<String> {
        to_date_key(raw).map(|k| k.to_string())
    }

    #[test]
    fn test_canonical_key_passes_through() {
        assert_eq!(key("2025-08-20").as_deref(), Some("2025-08-20"));
    }

    #[test]
    fn test_datetime_takes_date_before_separator() {
        assert_eq!(key("2025-08-20T10:00:00Z").as_deref(), Some("2025-08-20"));
        assert_eq!(key("2025-08-20T23:59:59.999Z").as_deref(), Some("2025-08-20"));
        assert_eq!(key("2025-08-20T00:00:00+05:30").as_deref(), Some("2025-08-20"));
    }

    #[test]
    fn test_same_utc_day_agrees_across_representations() {
        let expected = key("2025-08-20");
        for raw in [
            "2025-08-20T00:00:00Z",
            "2025-08-20T18:45:00.000Z",
            "2025-08-20 09:30:00",
            "2025/08/20",
            "Aug 20, 2025",
            "20 Aug 2025",
            "Wed, 20 Aug 2025 10:00:00 +0000",
            "1755684000000",
        ] {
            assert_eq!(key(raw), expected, "input {raw}");
        }
    }

    #[test]
    fn test_other_formats_use_utc_fields() {
        // 23:30 at -05:00 is already the next day in UTC
        assert_eq!(key("Wed, 20 Aug 2025 23:30:00 -0500").as_deref(), Some("2025-08-21"));
    }

    #[test]
    fn test_idempotent_on_canonical_output() {
        for raw in ["2025-08-20T10:00:00Z", "Sep 1, 2025", "2025/12/31", "1755684000000"] {
            let once = to_date_key(raw).unwrap();
            let twice = to_date_key(&once.to_string()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unparseable_returns_none() {
        assert_eq!(key(""), None);
        assert_eq!(key("   "), None);
        assert_eq!(key("not a date"), None);
        assert_eq!(key("2025-13-45"), None);
        assert_eq!(key("TBD"), None);
    }

    #[test]
    fn test_digit_only_inputs() {
        assert_eq!(key("2025").as_deref(), Some("2025-01-01"));
        assert_eq!(key("20250820").as_deref(), Some("2025-08-20"));
        assert_eq!(key("1755684000000").as_deref(), Some("2025-08-20"));
        assert_eq!(key("1755684000").as_deref(), Some("1970-01-21"));
    }

    #[test]
    fn test_short_digit_runs_are_rejected() {
        assert_eq!(key("0"), None);
        assert_eq!(key("123"), None);
        assert_eq!(key("202508"), None);
        assert_eq!(key("20251345"), None);
        assert_eq!(key("-2025"), None);
    }

    #[test]
    fn test_parse_instant_reads_naive_as_utc() {
        let instant = parse_instant("2025-08-20 10:15").unwrap();
        assert_eq!(instant.to_rfc3339(), "2025-08-20T10:15:00+00:00");
    }
}
