use std::sync::Arc;

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

use crate::{
    records::entities::HabitEntity,
    streaks::{compute_streaks, hours_on, StreakError, StreakResult},
    utils::percentage::{goal_percentage, Percentage},
};

/// Row of the dashboard: today's progress and the running streak of one habit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    pub id: i64,
    pub name: Arc<str>,
    pub color: Arc<str>,
    pub daily_goal_hours: f64,
    pub today_hours: f64,
    pub progress: Percentage,
    pub current_streak: u32,
}

/// Streak headline of a habit's detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreaks {
    pub id: i64,
    pub name: Arc<str>,
    #[serde(flatten)]
    pub streaks: StreakResult,
}

pub fn summarize_habit<Tz: TimeZone>(
    habit: &HabitEntity,
    today: NaiveDate,
    tz: &Tz,
) -> Result<HabitSummary, StreakError> {
    let entries = habit.log_entries(tz)?;
    let today_hours = hours_on(&entries, today);

    Ok(HabitSummary {
        id: habit.id,
        name: habit.name.clone(),
        color: habit.color.clone(),
        daily_goal_hours: habit.daily_goal_hours,
        today_hours,
        progress: goal_percentage(today_hours, habit.daily_goal_hours),
        current_streak: compute_streaks(&entries, today).current_streak,
    })
}

/// Summaries of all habits. With `below` only habits that haven't reached that much of their
/// goal today are kept.
pub fn summarize<'a, Tz: TimeZone>(
    habits: impl IntoIterator<Item = &'a HabitEntity>,
    today: NaiveDate,
    tz: &Tz,
    below: Option<Percentage>,
) -> Result<Vec<HabitSummary>, StreakError> {
    let mut summaries = vec![];
    for habit in habits {
        let summary = summarize_habit(habit, today, tz)?;
        if below.is_some_and(|below| summary.progress >= below) {
            continue;
        }
        summaries.push(summary);
    }
    Ok(summaries)
}

pub fn habit_streaks<Tz: TimeZone>(
    habit: &HabitEntity,
    today: NaiveDate,
    tz: &Tz,
) -> Result<HabitStreaks, StreakError> {
    Ok(HabitStreaks {
        id: habit.id,
        name: habit.name.clone(),
        streaks: habit.streaks(today, tz)?,
    })
}
