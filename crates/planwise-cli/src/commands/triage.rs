//! Task triage command.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use planwise_core::storage::session_path;
use planwise_core::{Config, MatchPolicy, Scorer, SessionLog};

use super::read_input;

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// First keyword in table order wins
    FirstMatch,
    /// Highest-scoring matching keyword wins
    HighestScore,
}

impl From<PolicyArg> for MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstMatch => MatchPolicy::FirstMatch,
            PolicyArg::HighestScore => MatchPolicy::HighestScore,
        }
    }
}

#[derive(Args)]
pub struct TriageArgs {
    /// Tasks to score; if none are given, one task per line is read
    tasks: Vec<String>,
    /// Read tasks from this file instead of stdin
    #[arg(long, short)]
    file: Option<PathBuf>,
    /// Keyword match policy (default from config)
    #[arg(long, value_enum)]
    policy: Option<PolicyArg>,
    /// Also append the tasks to the session log
    #[arg(long)]
    record: bool,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TriageArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tasks: Vec<String> = if args.tasks.is_empty() {
        read_input(args.file.as_deref())?
            .split('\n')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    } else {
        args.tasks
    };

    let policy = match args.policy {
        Some(p) => p.into(),
        None => Config::load_or_default().triage.policy,
    };
    let scores = Scorer::with_policy(policy).score_all(&tasks);

    if args.record {
        let path = session_path()?;
        let mut log = SessionLog::load(&path)?;
        log.tasks.extend(tasks.iter().cloned());
        log.save(&path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        println!("{:>3} {:>3}  {:<10} TASK", "U", "I", "QUADRANT");
        for s in &scores {
            println!(
                "{:>3} {:>3}  {:<10} {}",
                s.urgency,
                s.importance,
                s.quadrant.action(),
                s.task
            );
        }
    }
    Ok(())
}
