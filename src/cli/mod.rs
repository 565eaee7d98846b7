pub mod calendar;
pub mod dates;
pub mod output;
pub mod streaks;
pub mod summary;

use std::path::PathBuf;

use anyhow::Result;
use calendar::{process_calendar_command, CalendarCommand};
use clap::{Parser, Subcommand};
use dates::{reference_date, DateStyle};
use streaks::{process_streaks_command, StreaksCommand};
use summary::{process_summary_command, SummaryCommand};
use tracing::{debug, level_filters::LevelFilter};

use crate::{
    records::document::load_document,
    utils::{
        clock::DefaultClock,
        dir::create_application_default_path,
        logging::{enable_logging, CLI_PREFIX},
    },
};

const DEFAULT_DOCUMENT: &str = "habits.json";

#[derive(Parser, Debug)]
#[command(name = "habitstreak", version)]
#[command(about = "Tracks time invested in daily habits and reports streaks", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        short,
        global = true,
        env = "HABITSTREAK_FILE",
        help = "Habit document. By default tries to read habits.json from $XDG_STATE_HOME/habitstreak or $HOME/.local/state/habitstreak"
    )]
    file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Day streaks are counted up to. Examples are \"yesterday\", \"15/03/2025\". Defaults to the current day"
    )]
    today: Option<String>,
    #[arg(long, global = true, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Display today's progress and the current streak of every habit")]
    Summary {
        #[command(flatten)]
        command: SummaryCommand,
    },
    #[command(about = "Display current and longest streaks")]
    Streaks {
        #[command(flatten)]
        command: StreaksCommand,
    },
    #[command(about = "Display a month of a habit as a calendar")]
    Calendar {
        #[command(flatten)]
        command: CalendarCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    let application_dir = create_application_default_path()?;
    enable_logging(CLI_PREFIX, &application_dir, logging_level, args.log)?;

    let clock = DefaultClock;
    let today = reference_date(args.today.as_deref(), args.date_style, &clock)?;
    let file = args
        .file
        .unwrap_or_else(|| application_dir.join(DEFAULT_DOCUMENT));
    debug!("Counting streaks up to {today} from {file:?}");

    let document = load_document(&file).await?;

    match args.commands {
        Commands::Summary { command } => {
            process_summary_command(command, &document, today, args.json)
        }
        Commands::Streaks { command } => {
            process_streaks_command(command, &document, today, args.json)
        }
        Commands::Calendar { command } => {
            process_calendar_command(command, &document, today, args.date_style, args.json)
        }
    }
}
