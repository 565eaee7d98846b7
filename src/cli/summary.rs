use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{records::document::HabitsDocument, utils::percentage::Percentage};

use super::output::{format_hours, print_json, summary::summarize};

#[derive(Debug, Parser)]
pub struct SummaryCommand {
    #[arg(
        short = 'b',
        long = "below",
        help = "Only show habits that are below the specified percentage of today's goal"
    )]
    below: Option<Percentage>,
}

/// Command to process `summary` command. Prints today's progress and the current streak of
/// every habit, one habit per line.
pub fn process_summary_command(
    SummaryCommand { below }: SummaryCommand,
    document: &HabitsDocument,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let summaries = summarize(&document.habits, today, &Local, below)?;

    if json {
        return print_json(&summaries);
    }

    for summary in summaries {
        println!(
            "{}\t{}\t{} / {}\t{}%\t{} day streak",
            summary.id,
            summary.name,
            format_hours(summary.today_hours),
            format_hours(summary.daily_goal_hours),
            *summary.progress as i32,
            summary.current_streak
        );
    }
    Ok(())
}
