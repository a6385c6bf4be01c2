//! Timestamp parsing and date key derivation.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

/// Naive date-time shapes accepted for textual payment dates. `%.f` also
/// matches when there is no fractional part.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-carrying shapes not covered by RFC 3339.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];

/// Parse ISO-8601 text into an offset-aware timestamp.
///
/// Text without an offset is read as UTC, and a bare date parses as midnight.
/// A trailing `Z` or UTC offset is kept, so `naive_local()` on the result is the
/// wall-clock time as written.
pub fn parse_iso_timestamp(text: &str) -> Result<DateTime<FixedOffset>, String> {
    let text = text.trim();

    for format in NAIVE_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(timestamp.and_utc().fixed_offset());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp);
    }

    for format in OFFSET_FORMATS {
        if let Ok(timestamp) = DateTime::parse_from_str(text, format) {
            return Ok(timestamp);
        }
    }

    Err(format!("`{}` is not an ISO-8601 timestamp", text))
}

/// Encode the calendar date of `timestamp` as `YYYYMMDD`.
///
/// Only years 1..=9999 fit the eight-digit form.
pub fn date_key(timestamp: &NaiveDateTime) -> Result<i32, String> {
    let year = timestamp.year();
    if !(1..=9999).contains(&year) {
        return Err(format!("year {} does not fit an eight-digit date key", year));
    }

    Ok(year * 10_000 + timestamp.month() as i32 * 100 + timestamp.day() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone, Utc};

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_t_separated() {
        assert_eq!(
            parse_iso_timestamp("2024-01-15T12:30:00").unwrap(),
            ymd_hms(2024, 1, 15, 12, 30, 0).and_utc()
        );
    }

    #[test]
    fn test_parse_space_separated_with_fraction() {
        let parsed = parse_iso_timestamp("2005-05-25 11:30:37.250")
            .unwrap()
            .naive_local();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2005, 5, 25).unwrap());
        assert_eq!(
            parsed.time(),
            NaiveTime::from_hms_milli_opt(11, 30, 37, 250).unwrap()
        );
    }

    #[test]
    fn test_parse_minutes_precision() {
        assert_eq!(
            parse_iso_timestamp("2024-03-07T10:00").unwrap(),
            ymd_hms(2024, 3, 7, 10, 0, 0).and_utc()
        );
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(
            parse_iso_timestamp("2024-03-07").unwrap(),
            ymd_hms(2024, 3, 7, 0, 0, 0).and_utc()
        );
    }

    #[test]
    fn test_parse_offset_is_kept() {
        let shifted = parse_iso_timestamp("2024-03-07T23:15:00+05:00").unwrap();
        assert_eq!(shifted.offset().local_minus_utc(), 5 * 3600);
        assert_eq!(shifted.naive_local(), ymd_hms(2024, 3, 7, 23, 15, 0));
        assert_eq!(
            shifted.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 3, 7, 18, 15, 0).unwrap()
        );

        let zulu = parse_iso_timestamp("2024-03-07T23:15:00Z").unwrap();
        assert_eq!(
            zulu.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 3, 7, 23, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_space_separated_offset() {
        let parsed = parse_iso_timestamp("2024-03-07 01:00:00-03:00").unwrap();
        assert_eq!(parsed.naive_local(), ymd_hms(2024, 3, 7, 1, 0, 0));
        assert_eq!(
            parsed.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2024, 3, 7, 4, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_iso_timestamp("  2024-01-15T12:30:00\n").is_ok());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_iso_timestamp("yesterday").is_err());
        assert!(parse_iso_timestamp("2024-13-01T00:00:00").is_err());
        assert!(parse_iso_timestamp("15/01/2024").is_err());
        assert!(parse_iso_timestamp("").is_err());
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key(&ymd_hms(2024, 3, 7, 10, 0, 0)).unwrap(), 20240307);
        assert_eq!(date_key(&ymd_hms(2024, 1, 15, 12, 30, 0)).unwrap(), 20240115);
        assert_eq!(date_key(&ymd_hms(2005, 12, 31, 23, 59, 59)).unwrap(), 20051231);
    }

    #[test]
    fn test_date_key_ignores_time_of_day() {
        let morning = date_key(&ymd_hms(2024, 2, 29, 0, 0, 0)).unwrap();
        let night = date_key(&ymd_hms(2024, 2, 29, 23, 59, 59)).unwrap();
        assert_eq!(morning, night);
        assert_eq!(morning, 20240229);
    }

    #[test]
    fn test_date_key_is_eight_digits_for_small_years() {
        let key = date_key(&ymd_hms(1, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(key, 10101);
        assert_eq!(format!("{:08}", key), "00010101");
    }

    #[test]
    fn test_date_key_rejects_out_of_range_years() {
        assert!(date_key(&ymd_hms(10000, 1, 1, 0, 0, 0)).is_err());
        assert!(date_key(&ymd_hms(0, 1, 1, 0, 0, 0)).is_err());
    }
}
