use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "planwise", version, about = "Planwise CLI")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and inspect schedule text
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Score tasks on the urgency/importance matrix
    Triage(commands::triage::TriageArgs),
    /// Show the category a task description falls into
    Categorize {
        /// Task description
        text: String,
    },
    /// Parse and format clock times
    Time {
        #[command(subcommand)]
        action: commands::time::TimeAction,
    },
    /// Fixed appointments
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Session log and dashboard
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Show reminders due now
    Remind(commands::remind::RemindArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Triage(args) => commands::triage::run(args),
        Commands::Categorize { text } => {
            println!("{}", planwise_core::categorize(&text));
            Ok(())
        }
        Commands::Time { action } => commands::time::run(action),
        Commands::Event { action } => commands::event::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Remind(args) => commands::remind::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
