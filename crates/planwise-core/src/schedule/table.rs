//! Tabular view and quick summary of a generated schedule.

use serde::{Deserialize, Serialize};

/// A `time - task` row for table display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleRow {
    pub time: String,
    pub task: String,
}

/// Headline counts shown above a schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScheduleSummary {
    pub total_activities: usize,
    pub meetings: usize,
    pub breaks: usize,
}

/// Split every line containing `" - "` into a row.
///
/// Unlike [`super::parse_schedule`] this needs no time marker, only the
/// spaced separator. An empty result means the text should be shown as is.
pub fn schedule_rows(text: &str) -> Vec<ScheduleRow> {
    text.split('\n')
        .filter_map(|line| line.split_once(" - "))
        .map(|(time, task)| ScheduleRow {
            time: time.trim().to_string(),
            task: task.trim().to_string(),
        })
        .collect()
}

/// Count activities, meetings and breaks.
///
/// Every line of the trimmed text is an activity, so blank text still
/// counts as one.
pub fn summarize(text: &str) -> ScheduleSummary {
    let lower = text.to_lowercase();
    let count_lines_with = |needle: &str| lower.split('\n').filter(|l| l.contains(needle)).count();

    ScheduleSummary {
        total_activities: text.trim().split('\n').count(),
        meetings: count_lines_with("meeting"),
        breaks: count_lines_with("break"),
    }
}
