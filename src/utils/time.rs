use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Reads a stored log timestamp. Timestamps carrying an offset are moved into `tz` first, naive
/// timestamps and plain days are taken as written.
pub fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(v) = DateTime::parse_from_rfc3339(value) {
        return Some(v.with_timezone(tz).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|day| day.and_time(NaiveTime::MIN))
        })
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, NaiveDate, Utc};

    use super::parse_timestamp;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_day() {
        let parsed = parse_timestamp("2025-03-15", &Utc).unwrap();
        assert_eq!(parsed.date(), day(2025, 3, 15));
    }

    #[test]
    fn test_parse_naive_timestamp_keeps_day() {
        let parsed = parse_timestamp("2025-03-15T23:59:10.500", &Utc).unwrap();
        assert_eq!(parsed.date(), day(2025, 3, 15));

        let parsed = parse_timestamp("2025-03-15 08:00:00", &Utc).unwrap();
        assert_eq!(parsed.date(), day(2025, 3, 15));
    }

    #[test]
    fn test_parse_offset_is_resolved_in_timezone() {
        // Local midnight in UTC+1 is stored as 23:00 of the previous UTC day.
        let stored = "2025-03-14T23:00:00.000Z";
        let plus_one = FixedOffset::east_opt(3600).unwrap();

        assert_eq!(parse_timestamp(stored, &Utc).unwrap().date(), day(2025, 3, 14));
        assert_eq!(parse_timestamp(stored, &plus_one).unwrap().date(), day(2025, 3, 15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("", &Utc).is_none());
        assert!(parse_timestamp("yesterday", &Utc).is_none());
        assert!(parse_timestamp("2025-02-30", &Utc).is_none());
    }
}
