//! Clock time helpers.

use clap::Subcommand;

use planwise_core::clock::require_time;
use planwise_core::{format_time_display, format_time_slot};

#[derive(Subcommand)]
pub enum TimeAction {
    /// Normalize a time such as "9", "14:30" or "9:30 pm"
    Parse {
        input: String,
    },
    /// Format an agenda line
    Slot {
        start: String,
        end: String,
        title: String,
        #[arg(long, default_value = "")]
        location: String,
    },
}

pub fn run(action: TimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimeAction::Parse { input } => {
            let time = require_time(&input)?;
            println!("{}", format_time_display(time));
        }
        TimeAction::Slot {
            start,
            end,
            title,
            location,
        } => {
            let start = format_time_display(require_time(&start)?);
            let end = format_time_display(require_time(&end)?);
            println!("{}", format_time_slot(&start, &end, &title, &location));
        }
    }
    Ok(())
}
