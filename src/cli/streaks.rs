use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::records::document::HabitsDocument;

use super::output::{print_json, summary::habit_streaks};

#[derive(Debug, Parser)]
pub struct StreaksCommand {
    #[arg(long, help = "Habit id or name. Every habit is shown when omitted")]
    habit: Option<String>,
}

pub fn process_streaks_command(
    StreaksCommand { habit }: StreaksCommand,
    document: &HabitsDocument,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let streaks = document
        .select(habit.as_deref())?
        .into_iter()
        .map(|v| habit_streaks(v, today, &Local))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        return print_json(&streaks);
    }

    for habit in streaks {
        println!(
            "{}\t{}\tcurrent {}\tlongest {}",
            habit.id, habit.name, habit.streaks.current_streak, habit.streaks.longest_streak
        );
    }
    Ok(())
}
