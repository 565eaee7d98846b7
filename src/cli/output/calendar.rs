use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};
use now::DateTimeNow;
use serde::Serialize;

/// Lowest intensity of a day that has any time logged, so that short sessions stay visible.
const MIN_INTENSITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub hours: f64,
    pub is_today: bool,
    pub intensity: f64,
}

/// One month of a habit. Weeks start on Sunday, `leading_blanks` is the number of empty cells
/// before the first day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCalendar {
    pub month: NaiveDate,
    pub leading_blanks: u32,
    pub days: Vec<CalendarDay>,
}

impl MonthCalendar {
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(|v| v.hours).sum()
    }

    pub fn active_days(&self) -> usize {
        self.days.iter().filter(|v| v.hours > 0.).count()
    }
}

/// Scales hours against the busiest day into `0.3..=1.0`. Days without time get 0.
pub fn heat_intensity(hours: f64, max_hours: f64) -> f64 {
    if hours <= 0. || max_hours <= 0. {
        0.
    } else {
        (MIN_INTENSITY + hours / max_hours * (1. - MIN_INTENSITY)).min(1.)
    }
}

/// Builds the calendar of the month containing `anchor`. Intensity is relative to the busiest
/// day of the whole history, never less than one hour.
pub fn month_calendar<Tz: TimeZone>(
    daily_hours: &BTreeMap<NaiveDate, f64>,
    anchor: &DateTime<Tz>,
    today: NaiveDate,
) -> MonthCalendar {
    let first = anchor.beginning_of_month().date_naive();
    let next_month = first.checked_add_months(Months::new(1));

    let max_hours = daily_hours.values().copied().fold(1., f64::max);

    let days = first
        .iter_days()
        .take_while(|date| next_month.map_or(true, |next| *date < next))
        .map(|date| {
            let hours = daily_hours.get(&date).copied().unwrap_or(0.);
            CalendarDay {
                date,
                hours,
                is_today: date == today,
                intensity: heat_intensity(hours, max_hours),
            }
        })
        .collect();

    MonthCalendar {
        month: first,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}
