//! Session log and dashboard commands.

use chrono::Local;
use clap::Subcommand;

use planwise_core::storage::session_path;
use planwise_core::{Config, SessionLog};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Log today's energy level and satisfaction (1-10 each)
    CheckIn {
        #[arg(long)]
        energy: u8,
        #[arg(long)]
        satisfaction: u8,
    },
    /// Add hours spent on an activity
    LogTime {
        activity: String,
        hours: f64,
    },
    /// Show dashboard metrics
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Triage every logged task
    Triage {
        #[arg(long)]
        json: bool,
    },
    /// Clear the session log
    Reset,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = session_path()?;
    let mut log = SessionLog::load(&path)?;

    match action {
        SessionAction::CheckIn {
            energy,
            satisfaction,
        } => {
            log.record_check_in(energy, satisfaction)?;
            log.save(&path)?;
            println!("check-in saved ({} total)", log.energy_levels.len());
        }
        SessionAction::LogTime { activity, hours } => {
            log.record_time(&activity, hours)?;
            log.save(&path)?;
            println!("ok");
        }
        SessionAction::Show { json } => show(&log, json)?,
        SessionAction::Triage { json } => {
            let config = Config::load_or_default();
            let scores = log.triage(config.triage.policy);
            if json {
                println!("{}", serde_json::to_string_pretty(&scores)?);
            } else {
                for s in &scores {
                    println!("{:<10} U{:<2} I{:<2} {}", s.quadrant.action(), s.urgency, s.importance, s.task);
                }
            }
        }
        SessionAction::Reset => {
            SessionLog::default().save(&path)?;
            println!("session log cleared");
        }
    }
    Ok(())
}

fn show(log: &SessionLog, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = log.metrics();
    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }
    if !metrics.has_data {
        println!("No data yet. Triage tasks with --record, check in, or save a schedule.");
        return Ok(());
    }

    println!("Total tasks entered: {}", metrics.total_tasks);
    println!("Avg energy level:    {:.1}/10", metrics.avg_energy);
    println!("Avg satisfaction:    {:.1}/10", metrics.avg_satisfaction);
    println!("Schedules created:   {}", metrics.schedules_created);

    if !metrics.task_categories.is_empty() {
        println!("\nTask categories:");
        for (category, count) in &metrics.task_categories {
            println!("  {:<15} {}", category, count);
        }
    }
    if !metrics.time_allocation.is_empty() {
        println!("\nTime allocation (hours):");
        for (activity, hours) in &metrics.time_allocation {
            println!("  {:<15} {:.1}", activity, hours);
        }
    }

    let config = Config::load_or_default();
    let recent = log.recent_schedules(config.dashboard.recent_schedules);
    if !recent.is_empty() {
        println!("\nRecent schedules:");
        for record in recent {
            println!(
                "\n[{}] {} / {}",
                record.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                record.work_style,
                record.energy_pattern
            );
            println!("{}", record.schedule.trim_end());
        }
    }
    Ok(())
}
