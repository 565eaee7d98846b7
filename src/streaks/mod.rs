//! Streak computation over the logs of a single habit.
//!
//! A day is active when at least one entry on it has positive hours. The current streak is the
//! run of active days that ends on the reference day, or on the day before it when nothing has
//! been logged on the reference day yet. The longest streak is the largest run of active days
//! anywhere in the history.
//!
//! Everything here is pure: the reference day is passed in by the caller and the input is only
//! read.

mod entry;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::{instrument, trace};

pub use entry::{LogEntry, StreakError, StreakResult};

/// Active days of the logs, normalized to the day and deduplicated.
pub fn active_days<'a>(logs: impl IntoIterator<Item = &'a LogEntry>) -> BTreeSet<NaiveDate> {
    logs.into_iter()
        .filter(|v| v.is_active())
        .map(LogEntry::day)
        .collect()
}

/// Total of positive hours for every active day.
pub fn daily_hours<'a>(logs: impl IntoIterator<Item = &'a LogEntry>) -> BTreeMap<NaiveDate, f64> {
    let mut days = BTreeMap::new();
    for entry in logs.into_iter().filter(|v| v.is_active()) {
        *days.entry(entry.day()).or_insert(0.) += entry.hours_logged;
    }
    days
}

pub fn hours_on<'a>(logs: impl IntoIterator<Item = &'a LogEntry>, day: NaiveDate) -> f64 {
    logs.into_iter()
        .filter(|v| v.is_active() && v.day() == day)
        .map(|v| v.hours_logged)
        .sum()
}

/// Computes current and longest streak. Input order and duplicate days don't affect the result.
#[instrument(level = "trace", skip_all, fields(reference_date = %reference_date))]
pub fn compute_streaks<'a>(
    logs: impl IntoIterator<Item = &'a LogEntry>,
    reference_date: NaiveDate,
) -> StreakResult {
    let days = active_days(logs);
    if days.is_empty() {
        return StreakResult::EMPTY;
    }

    let result = StreakResult {
        current_streak: current_streak(&days, reference_date),
        longest_streak: longest_streak(&days),
    };
    trace!(active_days = days.len(), ?result, "Computed streaks");
    result
}

fn current_streak(days: &BTreeSet<NaiveDate>, reference_date: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut expected = reference_date;

    // Days after the reference day can't belong to a streak that ends on it.
    for &day in days.range(..=reference_date).rev() {
        match (expected - day).num_days() {
            0 => {}
            // Reference day isn't logged yet, the streak is still alive from the day before.
            1 if streak == 0 => {}
            _ => break,
        }
        streak += 1;
        let Some(previous) = day.pred_opt() else {
            break;
        };
        expected = previous;
    }

    streak
}

fn longest_streak(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in days {
        run = match previous {
            Some(previous) if (day - previous).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};

    use super::{compute_streaks, daily_hours, hours_on, LogEntry, StreakResult};
    use crate::utils::logging::TEST_LOGGING;

    const TODAY: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 5) {
        Some(day) => day,
        None => panic!("invalid day"),
    };

    fn days_ago(days: i64, hours: f64) -> LogEntry {
        LogEntry::on_day(TODAY - Duration::days(days), hours)
    }

    fn streaks(logs: &[LogEntry]) -> StreakResult {
        compute_streaks(logs, TODAY)
    }

    fn result(current_streak: u32, longest_streak: u32) -> StreakResult {
        StreakResult {
            current_streak,
            longest_streak,
        }
    }

    #[test]
    fn test_empty_input() {
        *TEST_LOGGING;
        assert_eq!(streaks(&[]), result(0, 0));
    }

    #[test]
    fn test_only_zero_and_negative_hours() {
        let logs = [days_ago(0, 0.), days_ago(1, 0.), days_ago(2, -1.5), days_ago(3, f64::NAN)];
        assert_eq!(streaks(&logs), result(0, 0));
    }

    #[test]
    fn test_single_day_today() {
        assert_eq!(streaks(&[days_ago(0, 1.)]), result(1, 1));
    }

    #[test]
    fn test_run_ending_yesterday_keeps_current_streak() {
        let logs = (1..=5).map(|v| days_ago(v, 0.5)).collect::<Vec<_>>();
        assert_eq!(streaks(&logs), result(5, 5));
    }

    #[test]
    fn test_run_ending_two_days_ago_is_not_current() {
        let logs = (2..=6).map(|v| days_ago(v, 0.5)).collect::<Vec<_>>();
        assert_eq!(streaks(&logs), result(0, 5));
    }

    #[test]
    fn test_gap_breaks_current_streak() {
        let logs = [days_ago(0, 1.), days_ago(3, 1.)];
        assert_eq!(streaks(&logs), result(1, 1));
    }

    #[test]
    fn test_single_missing_day_inside_run_breaks_it() {
        let logs = [days_ago(0, 1.), days_ago(2, 1.), days_ago(3, 1.)];
        assert_eq!(streaks(&logs), result(1, 2));
    }

    #[test]
    fn test_longest_streak_independent_of_recency() {
        let mut logs = (60..70).map(|v| days_ago(v, 2.)).collect::<Vec<_>>();
        logs.push(days_ago(0, 0.25));
        assert_eq!(streaks(&logs), result(1, 10));
    }

    #[test]
    fn test_zero_hour_day_splits_run() {
        let logs = [
            days_ago(0, 1.),
            days_ago(1, 1.),
            days_ago(2, 0.),
            days_ago(3, 1.),
            days_ago(4, 1.),
            days_ago(5, 1.),
        ];
        assert_eq!(streaks(&logs), result(2, 3));
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let late = (TODAY - Duration::days(1)).and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        let early = TODAY.and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        let logs = [LogEntry::new(early, 1.), LogEntry::new(late, 1.)];
        assert_eq!(streaks(&logs), result(2, 2));
    }

    #[test]
    fn test_duplicate_days_count_once() {
        let logs = [
            days_ago(0, 1.),
            days_ago(0, 0.5),
            days_ago(1, 1.),
            days_ago(1, 1.),
            days_ago(2, 1.),
        ];
        assert_eq!(streaks(&logs), result(3, 3));
    }

    #[test]
    fn test_future_days_only_affect_longest() {
        let logs = [days_ago(-2, 1.), days_ago(-1, 1.), days_ago(0, 1.), days_ago(1, 1.)];
        assert_eq!(streaks(&logs), result(2, 4));
    }

    #[test]
    fn test_order_independence_and_idempotence() {
        let mut logs = vec![
            days_ago(9, 1.),
            days_ago(0, 1.),
            days_ago(4, 1.),
            days_ago(1, 1.),
            days_ago(8, 1.),
            days_ago(2, 0.),
            days_ago(7, 1.),
        ];
        let expected = streaks(&logs);
        assert_eq!(expected, result(2, 3));
        assert_eq!(streaks(&logs), expected);

        logs.reverse();
        assert_eq!(streaks(&logs), expected);
        logs.sort_by_key(|v| v.date);
        assert_eq!(streaks(&logs), expected);
        logs.rotate_left(3);
        assert_eq!(streaks(&logs), expected);
    }

    /// Every activity pattern over twelve days around the reference day, checked against a
    /// direct count.
    #[test]
    fn test_matches_direct_count_for_all_patterns() {
        const WINDOW: i64 = 12;
        // Bit 0 is one day in the future, bit 1 is today, bit n is n - 1 days ago.
        let is_set = |mask: u32, ago: i64| mask & (1 << (ago + 1)) != 0;

        for mask in 0..(1u32 << WINDOW) {
            let logs = (-1..WINDOW - 1)
                .filter(|&ago| is_set(mask, ago))
                .map(|ago| days_ago(ago, 1.))
                .collect::<Vec<_>>();

            let start = if is_set(mask, 0) { 0 } else { 1 };
            let current = (start..WINDOW - 1).take_while(|&ago| is_set(mask, ago)).count() as u32;

            let mut longest = 0;
            let mut run = 0;
            for ago in -1..WINDOW - 1 {
                run = if is_set(mask, ago) { run + 1 } else { 0 };
                longest = longest.max(run);
            }

            let computed = streaks(&logs);
            assert_eq!(computed, result(current, longest), "mask {mask:#b}");
            assert!(computed.longest_streak >= computed.current_streak);
        }
    }

    #[test]
    fn test_daily_hours_sums_positive_entries() {
        let logs = [days_ago(0, 1.), days_ago(0, 0.5), days_ago(0, -3.), days_ago(2, 0.)];
        let days = daily_hours(&logs);
        assert_eq!(days.len(), 1);
        assert_eq!(days[&TODAY], 1.5);
        assert_eq!(hours_on(&logs, TODAY), 1.5);
        assert_eq!(hours_on(&logs, TODAY - Duration::days(2)), 0.);
    }

    #[test]
    fn test_parse_rejects_malformed_date() {
        let error = LogEntry::parse("15.03.2025", 1., &chrono::Utc).unwrap_err();
        assert_eq!(error, super::StreakError::InvalidInput("15.03.2025".into()));
    }
}
