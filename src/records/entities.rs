use std::{collections::BTreeSet, sync::Arc};

use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::streaks::{compute_streaks, LogEntry, StreakError, StreakResult};

const DEFAULT_COLOR: &str = "#3b82f6";

fn default_color() -> Arc<str> {
    DEFAULT_COLOR.into()
}

/// Time logged for a habit on one day, as it is stored.
#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HabitLogEntity {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub habit_id: Option<i64>,
    pub date: String,
    pub hours_logged: f64,
}

impl HabitLogEntity {
    pub fn to_log_entry<Tz: TimeZone>(&self, tz: &Tz) -> Result<LogEntry, StreakError> {
        LogEntry::parse(&self.date, self.hours_logged, tz)
    }
}

#[derive(PartialEq, Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HabitEntity {
    pub id: i64,
    pub name: Arc<str>,
    #[serde(default = "default_color")]
    pub color: Arc<str>,
    pub daily_goal_hours: f64,
    #[serde(default)]
    pub logs: Vec<HabitLogEntity>,
}

impl HabitEntity {
    /// Converts the whole history. Fails on the first date that can't be read.
    pub fn log_entries<Tz: TimeZone>(&self, tz: &Tz) -> Result<Vec<LogEntry>, StreakError> {
        let entries = self
            .logs
            .iter()
            .map(|v| v.to_log_entry(tz))
            .collect::<Result<Vec<_>, _>>()?;

        let days = entries.iter().map(LogEntry::day).collect::<BTreeSet<_>>();
        if days.len() != entries.len() {
            warn!(
                "Habit {} has {} logs for {} days, logs on the same day are merged",
                self.id,
                entries.len(),
                days.len()
            );
        }

        Ok(entries)
    }

    pub fn streaks<Tz: TimeZone>(
        &self,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<StreakResult, StreakError> {
        Ok(compute_streaks(&self.log_entries(tz)?, today))
    }

    /// Selector is either the numeric id or the habit name, compared case insensitively.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        selector.parse::<i64>().is_ok_and(|id| id == self.id)
            || self.name.to_lowercase() == selector.to_lowercase()
    }
}
