//! Append-only log of what the user has entered across sessions.
//!
//! The log is an explicit value owned by the caller. Nothing here is global:
//! the CLI loads it from `session.json`, appends, and saves it back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, ValidationError};
use crate::schedule::{categorize, category_counts, Category};
use crate::triage::{MatchPolicy, Scorer, TaskScore};

/// Lowest value on the 1-10 rating scales.
pub const RATING_MIN: u8 = 1;
/// Highest value on the 1-10 rating scales.
pub const RATING_MAX: u8 = 10;

/// A generated schedule kept for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRecord {
    pub timestamp: DateTime<Utc>,
    pub work_style: String,
    pub energy_pattern: String,
    pub schedule: String,
}

/// Aggregates shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub has_data: bool,
    pub total_tasks: usize,
    /// Mean energy level, 0.0 when nothing was logged.
    pub avg_energy: f64,
    /// Mean satisfaction rating, 0.0 when nothing was logged.
    pub avg_satisfaction: f64,
    pub schedules_created: usize,
    pub task_categories: BTreeMap<Category, usize>,
    pub time_allocation: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionLog {
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub energy_levels: Vec<u8>,
    #[serde(default)]
    pub productivity_ratings: Vec<u8>,
    /// Hours per activity.
    #[serde(default)]
    pub time_allocation: BTreeMap<String, f64>,
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
}

fn check_rating(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(RATING_MIN),
            max: i64::from(RATING_MAX),
        })
    }
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one task per non-blank line. Returns how many were added.
    pub fn record_tasks(&mut self, text: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.extend(
            text.split('\n')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
        );
        self.tasks.len() - before
    }

    /// Log an energy level and a satisfaction rating, both on 1-10.
    ///
    /// # Errors
    /// `OutOfRange` if either value is off the scale; nothing is appended.
    pub fn record_check_in(&mut self, energy: u8, satisfaction: u8) -> Result<(), ValidationError> {
        check_rating("energy", energy)?;
        check_rating("satisfaction", satisfaction)?;
        self.energy_levels.push(energy);
        self.productivity_ratings.push(satisfaction);
        Ok(())
    }

    /// Add hours spent on an activity.
    ///
    /// # Errors
    /// `InvalidValue` for a blank activity or negative/non-finite hours.
    pub fn record_time(&mut self, activity: &str, hours: f64) -> Result<(), ValidationError> {
        let activity = activity.trim();
        if activity.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "activity".into(),
                message: "must not be blank".into(),
            });
        }
        if !hours.is_finite() || hours < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "hours".into(),
                message: format!("expected a non-negative number, got {hours}"),
            });
        }
        *self.time_allocation.entry(activity.to_string()).or_insert(0.0) += hours;
        Ok(())
    }

    pub fn record_schedule(&mut self, record: ScheduleRecord) {
        self.schedules.push(record);
    }

    pub fn has_data(&self) -> bool {
        !self.tasks.is_empty()
            || !self.energy_levels.is_empty()
            || !self.time_allocation.is_empty()
            || !self.productivity_ratings.is_empty()
            || !self.schedules.is_empty()
    }

    /// Score every logged task.
    pub fn triage(&self, policy: MatchPolicy) -> Vec<TaskScore> {
        Scorer::with_policy(policy).score_all(&self.tasks)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics {
            has_data: self.has_data(),
            total_tasks: self.tasks.len(),
            avg_energy: mean(&self.energy_levels),
            avg_satisfaction: mean(&self.productivity_ratings),
            schedules_created: self.schedules.len(),
            task_categories: category_counts(self.tasks.iter().map(|t| categorize(t))),
            time_allocation: self.time_allocation.clone(),
        }
    }

    /// Up to `n` schedules, newest first.
    pub fn recent_schedules(&self, n: usize) -> Vec<&ScheduleRecord> {
        self.schedules.iter().rev().take(n).collect()
    }

    /// Load from `path`. A missing file is an empty log.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no session log yet");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write to `path` as pretty JSON.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
