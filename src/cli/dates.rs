use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, ValueEnum};

use crate::utils::clock::{today, Clock};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Parses a user supplied date relative to the clock. `name` is only used for the error.
pub fn parse_user_date(
    value: &str,
    name: &str,
    date_style: DateStyle,
    clock: &dyn Clock,
) -> Result<DateTime<Local>> {
    match parse_date_string(value, clock.now(), date_style.into()) {
        Ok(v) => Ok(v),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate {name} {value:?}: {e}"),
            )
            .into()),
    }
}

/// The day streaks are counted up to. Without an override this is the clock's current day.
pub fn reference_date(
    value: Option<&str>,
    date_style: DateStyle,
    clock: &dyn Clock,
) -> Result<NaiveDate> {
    match value {
        Some(value) => Ok(parse_user_date(value, "today", date_style, clock)?.date_naive()),
        None => Ok(today(clock)),
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    use crate::utils::clock::MockClock;

    use super::{reference_date, DateStyle};

    const NOW: NaiveDateTime = match (
        NaiveDate::from_ymd_opt(2025, 3, 16),
        NaiveTime::from_hms_opt(12, 0, 0),
    ) {
        (Some(day), Some(time)) => NaiveDateTime::new(day, time),
        _ => panic!("invalid time"),
    };

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Local.from_local_datetime(&NOW).unwrap());
        clock
    }

    #[test]
    fn test_reference_date_defaults_to_clock() -> Result<()> {
        assert_eq!(reference_date(None, DateStyle::Uk, &clock())?, NOW.date());
        Ok(())
    }

    #[test]
    fn test_reference_date_relative() -> Result<()> {
        assert_eq!(
            reference_date(Some("yesterday"), DateStyle::Uk, &clock())?,
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_reference_date_dialects() -> Result<()> {
        assert_eq!(
            reference_date(Some("02/03/2025"), DateStyle::Uk, &clock())?,
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
        assert_eq!(
            reference_date(Some("02/03/2025"), DateStyle::Us, &clock())?,
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
        );
        Ok(())
    }

    #[test]
    fn test_reference_date_rejects_garbage() {
        assert!(reference_date(Some("whenever"), DateStyle::Uk, &clock()).is_err());
    }
}
