use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;
use thiserror::Error;

use crate::utils::time::parse_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreakError {
    #[error("Invalid log date {0:?}, expected an RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidInput(String),
}

/// Time logged for a habit on a single day. The time of day of `date` carries no meaning, it
/// is dropped before any comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogEntry {
    pub date: NaiveDateTime,
    pub hours_logged: f64,
}

impl LogEntry {
    pub fn new(date: NaiveDateTime, hours_logged: f64) -> Self {
        Self { date, hours_logged }
    }

    pub fn on_day(day: NaiveDate, hours_logged: f64) -> Self {
        Self::new(day.and_time(NaiveTime::MIN), hours_logged)
    }

    /// Builds an entry out of a stored timestamp, see [parse_timestamp] for accepted formats.
    pub fn parse<Tz: TimeZone>(
        date: &str,
        hours_logged: f64,
        tz: &Tz,
    ) -> Result<Self, StreakError> {
        parse_timestamp(date, tz)
            .map(|date| Self::new(date, hours_logged))
            .ok_or_else(|| StreakError::InvalidInput(date.to_string()))
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Only days with positive time count as active.
    pub fn is_active(&self) -> bool {
        self.hours_logged > 0.
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl StreakResult {
    pub const EMPTY: StreakResult = StreakResult {
        current_streak: 0,
        longest_streak: 0,
    };
}
