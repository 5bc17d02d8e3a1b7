//! Schedule text parsing.
//!
//! Turns the free-form schedule text returned by the text-generation service
//! into structured [`TimeBlock`]s. The heuristics are deliberately coarse:
//! a line is a candidate when it has a `:` and mentions `am`, `pm`,
//! `morning`, `afternoon` or `evening` anywhere (so "exam: ..." qualifies),
//! and the time/task split happens on the first `-`.
//!
//! `TimeBlock::time` is an opaque display label. It is never parsed into a
//! clock value, so consumers must not sort or do arithmetic on it.

pub mod table;
pub mod timeline;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use table::{schedule_rows, summarize, ScheduleRow, ScheduleSummary};
pub use timeline::{layout, TimelineConfig, TimelineEntry};

/// Task-type bucket used for grouping in charts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Meetings,
    #[serde(rename = "Deep Work")]
    DeepWork,
    Administrative,
    Breaks,
    Learning,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Meetings,
        Category::DeepWork,
        Category::Administrative,
        Category::Breaks,
        Category::Learning,
        Category::Other,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meetings => "Meetings",
            Category::DeepWork => "Deep Work",
            Category::Administrative => "Administrative",
            Category::Breaks => "Breaks",
            Category::Learning => "Learning",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Keyword rules, checked top to bottom. First hit wins.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Meetings, &["meeting", "call", "discussion"]),
    (Category::DeepWork, &["project", "work", "develop", "code"]),
    (Category::Administrative, &["email", "admin", "organize"]),
    (Category::Breaks, &["break", "lunch", "rest"]),
    (Category::Learning, &["learn", "read", "study"]),
];

/// Substrings that make a line look like it carries a time of day.
const TIME_MARKERS: &[&str] = &["am", "pm", "morning", "afternoon", "evening"];

/// One parsed schedule line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeBlock {
    /// Raw text left of the first `-`, trimmed.
    pub time: String,
    /// Raw text right of the first `-`, trimmed.
    pub task: String,
    pub category: Category,
}

/// Assign a category to a task description by keyword substring match.
///
/// Rules are checked in a fixed order, so "work meeting" is a meeting.
pub fn categorize(task: &str) -> Category {
    let lower = task.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

fn is_candidate(line: &str) -> bool {
    if !line.contains(':') {
        return false;
    }
    let lower = line.to_lowercase();
    TIME_MARKERS.iter().any(|m| lower.contains(m))
}

fn parse_line(line: &str) -> Option<TimeBlock> {
    if !is_candidate(line) {
        return None;
    }
    let (time, task) = line.split_once('-')?;
    let task = task.trim();
    Some(TimeBlock {
        time: time.trim().to_string(),
        task: task.to_string(),
        category: categorize(task),
    })
}

/// Parse schedule text into time blocks, keeping input line order.
///
/// Never fails: lines that are not candidates, or candidates without a `-`,
/// are skipped. The result has at most one block per input line.
pub fn parse_schedule(text: &str) -> Vec<TimeBlock> {
    let blocks: Vec<TimeBlock> = text.split('\n').filter_map(parse_line).collect();
    tracing::debug!(blocks = blocks.len(), "parsed schedule text");
    blocks
}

/// Count how many items fall into each category.
///
/// Only categories that occur are present in the map.
pub fn category_counts<I>(categories: I) -> BTreeMap<Category, usize>
where
    I: IntoIterator<Item = Category>,
{
    let mut counts = BTreeMap::new();
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
    }
    counts
}
