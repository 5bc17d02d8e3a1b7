//! Fixed appointment commands.

use clap::Subcommand;

use planwise_core::storage::agenda_path;
use planwise_core::{Agenda, FixedEvent, FixedEventInput};

#[derive(Subcommand)]
pub enum EventAction {
    /// Add a meeting or class
    Add {
        #[arg(long)]
        title: String,
        /// Event type, e.g. Meeting or Class
        #[arg(long = "type")]
        kind: String,
        /// Start time (09:00 AM, 14:30 or 9)
        #[arg(long)]
        start: String,
        /// End time
        #[arg(long)]
        end: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    /// List fixed events
    List {
        #[arg(long)]
        json: bool,
    },
    /// Remove an event by its number in `event list`
    Remove {
        number: usize,
    },
    /// Remove all events
    Clear,
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = agenda_path()?;
    let mut agenda = Agenda::load(&path)?;

    match action {
        EventAction::Add {
            title,
            kind,
            start,
            end,
            location,
        } => {
            let event = FixedEvent::from_input(&FixedEventInput {
                title,
                kind,
                start,
                end,
                location,
            })?;
            println!("added: {}", event.slot_line());
            agenda.add(event);
            agenda.save(&path)?;
        }
        EventAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(agenda.events())?);
            } else if agenda.is_empty() {
                println!("no fixed events");
            } else {
                for (i, event) in agenda.events().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, event.slot_line());
                }
            }
        }
        EventAction::Remove { number } => {
            let removed = number
                .checked_sub(1)
                .and_then(|index| agenda.remove(index))
                .ok_or_else(|| format!("no event number {number}"))?;
            agenda.save(&path)?;
            println!("removed: {}", removed.title);
        }
        EventAction::Clear => {
            agenda.clear();
            agenda.save(&path)?;
            println!("all events cleared");
        }
    }
    Ok(())
}
