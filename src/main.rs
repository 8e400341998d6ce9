/*!
# MicroMood - Daily Mood Tracker

This file contains the main application flow: it parses the command line,
loads configuration, opens the store and dispatches to the operations layer.
The current time is read once here and passed down explicitly.

## Usage

```text
micromood [OPTIONS] <COMMAND>

Commands:
  select   Record a mood (1 = great .. 5 = terrible); selecting the same mood again clears it
  note     Set notes or tags on an existing mood; empty text clears them
  delete   Delete the mood for a day
  show     Show the month containing a day
  export   Export all moods as CSV
  import   Import moods from a CSV file; days that already have a mood are skipped
  summary  Show the current streak and this week's moods

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
```

## Configuration

- `MICROMOOD_DIR`: Data directory (defaults to `~/.local/share/micromood`)
- `MICROMOOD_DB`: Database file name or path (defaults to `micromood.db`)
- `MICROMOOD_EXPORT_DIR`: Export directory (defaults to `<data dir>/exports`)
- `RUST_LOG`: Log filter, overriding `--verbose`
*/

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use micromood::cli::{resolve_day, CliArgs, Command};
use micromood::config::Config;
use micromood::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON};
use micromood::db::Database;
use micromood::errors::{AppError, AppResult};
use micromood::mood::{DateKey, MoodScore};
use micromood::ops::{self, SelectionOutcome, WriteLock};
use std::fs;
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool, format: &str) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    // Obtain current date/time once at the beginning
    let now = Local::now().naive_local();

    let args = CliArgs::parse();
    init_logging(args.verbose, &args.log_format);
    debug!("CLI arguments: {:?}", args);

    if let Err(e) = run(args.command, now) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Runs one command against the configured store.
///
/// Mutating commands hold the write lock until they return.
fn run(command: Command, now: NaiveDateTime) -> AppResult<()> {
    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;

    fs::create_dir_all(&config.data_dir)?;
    let _lock = if command.is_write() {
        Some(WriteLock::acquire(&config.data_dir)?)
    } else {
        None
    };

    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    let today = DateKey::from_datetime(now);

    match command {
        Command::Select { score, date } => {
            let day = resolve_day(date.as_deref(), today)?;
            let outcome = ops::select_mood(&db, day, score)?;
            let label = MoodScore::new(score)?.label();
            match outcome {
                SelectionOutcome::Cleared => println!("{}: cleared ({} was already recorded)", day, label),
                _ => println!("{}: feeling {} ({})", day, label, outcome),
            }
        }
        Command::Note { text, tags, date } => {
            let day = resolve_day(date.as_deref(), today)?;
            if let Some(text) = text {
                if ops::update_notes(&db, day, Some(text))? {
                    println!("{}: notes saved", day);
                } else {
                    println!("{}: no mood recorded, notes not saved", day);
                }
            }
            if let Some(tags) = tags {
                if ops::update_tags(&db, day, Some(tags))? {
                    println!("{}: tags saved", day);
                } else {
                    println!("{}: no mood recorded, tags not saved", day);
                }
            }
        }
        Command::Delete { date } => {
            let day = resolve_day(date.as_deref(), today)?;
            if ops::delete_mood(&db, day)? {
                println!("{}: deleted", day);
            } else {
                println!("{}: nothing to delete", day);
            }
        }
        Command::Show { date } => {
            let day = resolve_day(date.as_deref(), today)?;
            let records = ops::month_view(&db, day)?;
            print!("{}", ops::render_month(day, &records));
        }
        Command::Export { out, stdout } => {
            if stdout {
                print!("{}", ops::export_csv(&db)?);
            } else {
                let dir = out.unwrap_or_else(|| config.export_dir.clone());
                let path = ops::export_to_dir(&db, &dir, today)?;
                println!("Exported to {}", path.display());
            }
        }
        Command::Import { file } => {
            let report = ops::import_file(&db, &file)?;
            println!(
                "Imported {} moods, skipped {} already recorded",
                report.added, report.skipped
            );
        }
        Command::Summary { json } => {
            let summary = ops::weekly_summary(&db, now)?;
            if json {
                let text = serde_json::to_string_pretty(&summary)
                    .map_err(|e| AppError::Io(e.into()))?;
                println!("{}", text);
            } else {
                print!("{}", summary);
            }
        }
    }

    Ok(())
}
