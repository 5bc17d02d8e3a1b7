//! Schedule text commands.

use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Subcommand};
use std::collections::BTreeMap;
use std::path::PathBuf;

use planwise_core::schedule::{self, category_counts};
use planwise_core::storage::session_path;
use planwise_core::{Category, Config, ScheduleRecord, SessionLog};

use super::read_input;

#[derive(Args)]
pub struct InputArgs {
    /// Read schedule text from this file instead of stdin
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Extract time blocks with categories
    Parse(InputArgs),
    /// Split "time - task" lines into a table
    Table(InputArgs),
    /// Count activities, meetings and breaks
    Summary(InputArgs),
    /// Lay the first blocks out on a timeline
    Timeline {
        #[command(flatten)]
        input: InputArgs,
        /// Day to place the timeline on (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Keep a schedule in the session log
    Save {
        /// Read schedule text from this file instead of stdin
        #[arg(long, short)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "Balanced")]
        work_style: String,
        #[arg(long, default_value = "Consistent Throughout")]
        energy_pattern: String,
    },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Parse(args) => {
            let text = read_input(args.file.as_deref())?;
            let blocks = schedule::parse_schedule(&text);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                for block in &blocks {
                    println!("{:<16} {:<15} {}", block.time, block.category, block.task);
                }
                print_counts(category_counts(blocks.iter().map(|b| b.category)));
            }
        }
        ScheduleAction::Table(args) => {
            let text = read_input(args.file.as_deref())?;
            let rows = schedule::schedule_rows(&text);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                // nothing tabular, show the text as is
                print!("{text}");
            } else {
                for row in &rows {
                    println!("{:<16} {}", row.time, row.task);
                }
            }
        }
        ScheduleAction::Summary(args) => {
            let text = read_input(args.file.as_deref())?;
            let summary = schedule::summarize(&text);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Total activities: {}", summary.total_activities);
                println!("Meetings: {}", summary.meetings);
                println!("Breaks: {}", summary.breaks);
            }
        }
        ScheduleAction::Timeline { input, date } => {
            let text = read_input(input.file.as_deref())?;
            let config = Config::load_or_default();
            let blocks = schedule::parse_schedule(&text);
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let entries = schedule::layout(&blocks, date, &config.timeline);
            if input.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!(
                        "{}-{}  {:<15} {}",
                        entry.start.format("%H:%M"),
                        entry.end.format("%H:%M"),
                        entry.category,
                        entry.label
                    );
                }
                print_counts(category_counts(entries.iter().map(|e| e.category)));
            }
        }
        ScheduleAction::Save {
            file,
            work_style,
            energy_pattern,
        } => {
            let text = read_input(file.as_deref())?;
            if text.trim().is_empty() {
                return Err("schedule text is empty".into());
            }
            let path = session_path()?;
            let mut log = SessionLog::load(&path)?;
            log.record_schedule(ScheduleRecord {
                timestamp: Utc::now(),
                work_style,
                energy_pattern,
                schedule: text,
            });
            log.save(&path)?;
            println!("schedule saved ({} total)", log.schedules.len());
        }
    }
    Ok(())
}

fn print_counts(counts: BTreeMap<Category, usize>) {
    if counts.is_empty() {
        return;
    }
    println!();
    for (category, count) in counts {
        println!("{:<15} {}", category.to_string(), count);
    }
}
