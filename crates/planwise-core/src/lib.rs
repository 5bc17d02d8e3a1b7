//! # Planwise Core Library
//!
//! Deterministic text analysis behind the Planwise productivity assistant.
//! The assistant hands schedules and task lists to a hosted text-generation
//! service; this crate turns what comes back (and what the user typed) into
//! structured records for charts and summaries.
//!
//! ## Key Components
//!
//! - [`parse_schedule`]: free-form schedule text to [`TimeBlock`]s with a
//!   keyword-assigned [`Category`]
//! - [`score_tasks`]: urgency/importance scoring and Eisenhower [`Quadrant`]
//! - [`SessionLog`]: append-only record of tasks, check-ins and schedules
//! - [`Agenda`]: validated fixed appointments
//! - [`Config`]: TOML configuration in the data directory
//!
//! `parse_schedule`, `score_tasks` and the other text helpers are pure and
//! total: they hold no state, do no I/O and never fail, so they can be called
//! from any thread or async task.

pub mod agenda;
pub mod clock;
pub mod error;
pub mod reminders;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod triage;

pub use agenda::{Agenda, FixedEvent, FixedEventInput};
pub use clock::{format_time_display, format_time_slot, parse_time_input};
pub use error::{ConfigError, CoreError, ValidationError};
pub use reminders::ReminderItem;
pub use schedule::{
    categorize, category_counts, parse_schedule, Category, ScheduleRow, ScheduleSummary,
    TimeBlock, TimelineConfig, TimelineEntry,
};
pub use session::{DashboardMetrics, ScheduleRecord, SessionLog};
pub use storage::Config;
pub use triage::{score_tasks, MatchPolicy, Quadrant, Scorer, TaskScore};
