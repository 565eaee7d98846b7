use std::fmt::Write;

use ansi_term::{Colour, Style};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate};
use clap::Parser;

use crate::{
    records::{document::HabitsDocument, entities::HabitEntity},
    streaks::{compute_streaks, daily_hours, StreakResult},
    utils::clock::{Clock, DayClock},
};

use super::{
    dates::{parse_user_date, DateStyle},
    output::{
        calendar::{month_calendar, MonthCalendar},
        format_hours, print_json,
    },
};

/// Background of cells without logged time.
const EMPTY_CELL: (u8, u8, u8) = (243, 244, 246);
const DEFAULT_CELL: (u8, u8, u8) = (59, 130, 246);

#[derive(Debug, Parser)]
pub struct CalendarCommand {
    #[arg(long, help = "Habit id or name")]
    habit: String,
    #[arg(
        long,
        short,
        help = "Any day of the month to show. Examples are \"1 month ago\", \"01/02/2025\". Relative dates count from today. Defaults to the month of today"
    )]
    month: Option<String>,
    #[arg(long, help = "Don't color the cells")]
    plain: bool,
}

/// Command to process `calendar` command. Shows one month of a habit with every day shaded by
/// the time logged on it, together with the streak headline.
pub fn process_calendar_command(
    CalendarCommand {
        habit,
        month,
        plain,
    }: CalendarCommand,
    document: &HabitsDocument,
    today: NaiveDate,
    date_style: DateStyle,
    json: bool,
) -> Result<()> {
    let habit = document
        .find(&habit)
        .ok_or_else(|| anyhow!("No habit with id or name {habit:?}"))?;
    let entries = habit.log_entries(&Local)?;

    let anchor = month_anchor(month.as_deref(), today, date_style)?;
    let calendar = month_calendar(&daily_hours(&entries), &anchor, today);

    if json {
        return print_json(&calendar);
    }

    let streaks = compute_streaks(&entries, today);
    print!("{}", render_calendar(habit, &calendar, streaks, !plain)?);
    Ok(())
}

/// A moment inside the month to show. Relative input is resolved against `today`, which may be
/// overridden and so differ from the wall clock.
fn month_anchor(
    month: Option<&str>,
    today: NaiveDate,
    date_style: DateStyle,
) -> Result<DateTime<Local>> {
    let clock = DayClock::new(today)?;
    match month {
        Some(month) => parse_user_date(month, "month", date_style, &clock),
        None => Ok(clock.now()),
    }
}

fn render_calendar(
    habit: &HabitEntity,
    calendar: &MonthCalendar,
    streaks: StreakResult,
    colored: bool,
) -> Result<String> {
    let colour = parse_hex_color(&habit.color).unwrap_or(DEFAULT_CELL);
    let mut out = String::new();

    writeln!(
        out,
        "{}\tcurrent streak {}\tlongest streak {}",
        habit.name, streaks.current_streak, streaks.longest_streak
    )?;
    writeln!(out, "{}", calendar.month.format("%B %Y"))?;
    writeln!(out, "Sun Mon Tue Wed Thu Fri Sat")?;

    let mut row = vec!["   ".to_string(); calendar.leading_blanks as usize];
    for day in &calendar.days {
        // Today is marked with a star.
        let cell = if day.is_today {
            format!("{:>2}*", day.date.day())
        } else {
            format!("{:>3}", day.date.day())
        };

        if colored && day.intensity > 0. {
            let (r, g, b) = blend(colour, day.intensity);
            let style = Style::new().on(Colour::RGB(r, g, b)).fg(Colour::Black);
            row.push(style.paint(cell).to_string());
        } else {
            row.push(cell);
        }

        if row.len() == 7 {
            writeln!(out, "{}", row.join(" "))?;
            row.clear();
        }
    }
    if !row.is_empty() {
        writeln!(out, "{}", row.join(" "))?;
    }

    writeln!(
        out,
        "{} over {} days",
        format_hours(calendar.total_hours()),
        calendar.active_days()
    )?;
    Ok(out)
}

fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim().strip_prefix('#')?;
    if value.len() != 6 || !value.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Mixes the habit colour into the empty cell background.
fn blend((r, g, b): (u8, u8, u8), intensity: f64) -> (u8, u8, u8) {
    let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * intensity).round() as u8;
    (
        mix(EMPTY_CELL.0, r),
        mix(EMPTY_CELL.1, g),
        mix(EMPTY_CELL.2, b),
    )
}
