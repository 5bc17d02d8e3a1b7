use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use planwise_core::clock::require_time;
use planwise_core::reminders::{due, load_reminders};
use planwise_core::storage::data_dir;

#[derive(Args)]
pub struct RemindArgs {
    /// Reminder file (default: <data dir>/user_schedule.json)
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Check this time instead of now
    #[arg(long)]
    at: Option<String>,
}

pub fn run(args: RemindArgs) -> Result<(), Box<dyn std::error::Error>> {
    let path = match args.file {
        Some(path) => path,
        None => data_dir()?.join("user_schedule.json"),
    };
    let now = match args.at {
        Some(at) => require_time(&at)?,
        None => Local::now().time(),
    };

    let items = load_reminders(&path);
    for item in due(&items, now) {
        println!("Reminder: {}", item.task);
    }
    Ok(())
}
