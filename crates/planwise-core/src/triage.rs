//! Keyword-based task triage on the Eisenhower matrix.
//!
//! Urgency and importance come from fixed keyword tables. By default the
//! first keyword in table order that occurs in the task wins, even when a
//! later keyword would score higher ("deadline asap" is 9, not 10). The
//! [`MatchPolicy::HighestScore`] policy is available as an opt-in.
//!
//! Both axes fall back to 5 when nothing matches, and the quadrant
//! thresholds are inclusive at 5, so an unrecognised task lands in
//! [`Quadrant::DoFirst`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency keywords in lookup order.
pub const URGENCY_KEYWORDS: &[(&str, u8)] = &[
    ("deadline", 9),
    ("urgent", 9),
    ("asap", 10),
    ("today", 8),
    ("tomorrow", 7),
    ("this week", 6),
    ("soon", 5),
    ("eventually", 2),
];

/// Importance keywords in lookup order.
pub const IMPORTANCE_KEYWORDS: &[(&str, u8)] = &[
    ("critical", 10),
    ("important", 8),
    ("strategic", 9),
    ("revenue", 9),
    ("client", 8),
    ("project", 7),
    ("meeting", 6),
    ("email", 3),
    ("admin", 2),
];

/// Score used when no keyword matches.
pub const DEFAULT_SCORE: u8 = 5;

/// Threshold at or above which an axis counts as high.
const QUADRANT_THRESHOLD: u8 = 5;

/// How a keyword table resolves several matching keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The first matching keyword in table order.
    #[default]
    FirstMatch,
    /// The highest score among matching keywords; ties go to table order.
    HighestScore,
}

/// Eisenhower matrix quadrant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    DoFirst,
    Schedule,
    Delegate,
    Eliminate,
}

impl Quadrant {
    /// Short action name.
    pub fn action(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First",
            Quadrant::Schedule => "Schedule",
            Quadrant::Delegate => "Delegate",
            Quadrant::Eliminate => "Eliminate",
        }
    }

    /// Action name with the urgency/importance description.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::DoFirst => "Do First (Urgent & Important)",
            Quadrant::Schedule => "Schedule (Important, Not Urgent)",
            Quadrant::Delegate => "Delegate (Urgent, Not Important)",
            Quadrant::Eliminate => "Eliminate (Not Urgent, Not Important)",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Triage result for one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskScore {
    pub task: String,
    pub urgency: u8,
    pub importance: u8,
    pub quadrant: Quadrant,
}

/// Map an urgency/importance pair to its quadrant.
pub fn quadrant(urgency: u8, importance: u8) -> Quadrant {
    let urgent = urgency >= QUADRANT_THRESHOLD;
    let important = importance >= QUADRANT_THRESHOLD;
    match (urgent, important) {
        (true, true) => Quadrant::DoFirst,
        (false, true) => Quadrant::Schedule,
        (true, false) => Quadrant::Delegate,
        (false, false) => Quadrant::Eliminate,
    }
}

fn lookup(table: &[(&str, u8)], task: &str, policy: MatchPolicy) -> u8 {
    let lower = task.to_lowercase();
    let mut matches = table.iter().filter(|(keyword, _)| lower.contains(keyword));
    let hit = match policy {
        MatchPolicy::FirstMatch => matches.next(),
        // max_by_key keeps the last maximum, so fold to keep the first one
        MatchPolicy::HighestScore => matches.fold(None::<&(&str, u8)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        }),
    };
    hit.map(|(_, score)| *score).unwrap_or(DEFAULT_SCORE)
}

/// Urgency of a task under the default first-match policy.
pub fn urgency(task: &str) -> u8 {
    lookup(URGENCY_KEYWORDS, task, MatchPolicy::FirstMatch)
}

/// Importance of a task under the default first-match policy.
pub fn importance(task: &str) -> u8 {
    lookup(IMPORTANCE_KEYWORDS, task, MatchPolicy::FirstMatch)
}

/// Task scorer with a configurable keyword match policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    policy: MatchPolicy,
}

impl Scorer {
    /// Scorer with the first-match policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Score a single task.
    pub fn score(&self, task: &str) -> TaskScore {
        let urgency = lookup(URGENCY_KEYWORDS, task, self.policy);
        let importance = lookup(IMPORTANCE_KEYWORDS, task, self.policy);
        TaskScore {
            task: task.to_string(),
            urgency,
            importance,
            quadrant: quadrant(urgency, importance),
        }
    }

    /// Score tasks, keeping input order.
    pub fn score_all<S: AsRef<str>>(&self, tasks: &[S]) -> Vec<TaskScore> {
        let scores: Vec<TaskScore> = tasks.iter().map(|t| self.score(t.as_ref())).collect();
        tracing::debug!(tasks = scores.len(), policy = ?self.policy, "scored tasks");
        scores
    }
}

/// Score tasks with the default first-match policy.
pub fn score_tasks<S: AsRef<str>>(tasks: &[S]) -> Vec<TaskScore> {
    Scorer::new().score_all(tasks)
}
