//! Timeline layout for parsed schedule blocks.
//!
//! Block time labels are free text, so the layout does not read them.
//! Entries are placed on a synthetic grid instead: the first one at
//! `start_hour`, each following one `spacing_minutes` later, each lasting
//! `block_minutes`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Category, TimeBlock};

/// Grid parameters for [`layout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_spacing_minutes")]
    pub spacing_minutes: u32,
    #[serde(default = "default_block_minutes")]
    pub block_minutes: u32,
    #[serde(default = "default_max_blocks")]
    pub max_blocks: usize,
    /// Labels longer than this many characters are cut and get `...`.
    #[serde(default = "default_label_width")]
    pub label_width: usize,
}

fn default_start_hour() -> u32 {
    8
}
fn default_spacing_minutes() -> u32 {
    90
}
fn default_block_minutes() -> u32 {
    60
}
fn default_max_blocks() -> usize {
    6
}
fn default_label_width() -> usize {
    30
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            spacing_minutes: default_spacing_minutes(),
            block_minutes: default_block_minutes(),
            max_blocks: default_max_blocks(),
            label_width: default_label_width(),
        }
    }
}

/// A block placed on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEntry {
    pub label: String,
    pub category: Category,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

fn truncate_label(task: &str, width: usize) -> String {
    if task.chars().count() > width {
        format!("{}...", task.chars().take(width).collect::<String>())
    } else {
        task.to_string()
    }
}

/// Place the leading blocks of a schedule on `date`.
pub fn layout(blocks: &[TimeBlock], date: NaiveDate, config: &TimelineConfig) -> Vec<TimelineEntry> {
    if config.start_hour > 23 {
        tracing::warn!(start_hour = config.start_hour, "timeline start hour clamped to 23");
    }
    let first_start = NaiveTime::from_hms_opt(config.start_hour.min(23), 0, 0).unwrap_or_default();
    let base = date.and_time(first_start);
    let spacing = Duration::minutes(i64::from(config.spacing_minutes));
    let length = Duration::minutes(i64::from(config.block_minutes));

    blocks
        .iter()
        .take(config.max_blocks)
        .enumerate()
        .map_while(|(i, block)| {
            let offset = spacing.checked_mul(i32::try_from(i).ok()?)?;
            let start = base.checked_add_signed(offset)?;
            let end = start.checked_add_signed(length)?;
            Some(TimelineEntry {
                label: truncate_label(&block.task, config.label_width),
                category: block.category,
                start,
                end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::parse_schedule;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn default_grid() {
        let blocks = parse_schedule("9:00 AM - Team meeting\n2:00 PM - Lunch break\n3:00 PM - Code");
        let entries = layout(&blocks, day(), &TimelineConfig::default());
        assert_eq!(entries.len(), 3);
        assert_eq!((entries[0].start, entries[0].end), (at(8, 0), at(9, 0)));
        assert_eq!((entries[1].start, entries[1].end), (at(9, 30), at(10, 30)));
        assert_eq!((entries[2].start, entries[2].end), (at(11, 0), at(12, 0)));
        assert_eq!(entries[1].category, Category::Breaks);
    }

    #[test]
    fn only_first_blocks_are_placed() {
        let text: String = (0..10).map(|i| format!("{i}:00 am - task {i}\n")).collect();
        let blocks = parse_schedule(&text);
        assert_eq!(blocks.len(), 10);
        let entries = layout(&blocks, day(), &TimelineConfig::default());
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[5].label, "task 5");
    }

    #[test]
    fn long_labels_are_truncated_by_chars() {
        let long = "é".repeat(31);
        let blocks = parse_schedule(&format!("9:00 am - {long}"));
        let entries = layout(&blocks, day(), &TimelineConfig::default());
        assert_eq!(entries[0].label, format!("{}...", "é".repeat(30)));

        let exact = "x".repeat(30);
        let blocks = parse_schedule(&format!("9:00 am - {exact}"));
        let entries = layout(&blocks, day(), &TimelineConfig::default());
        assert_eq!(entries[0].label, exact);
    }

    #[test]
    fn custom_grid_can_cross_midnight() {
        let config = TimelineConfig {
            start_hour: 23,
            spacing_minutes: 60,
            block_minutes: 30,
            ..TimelineConfig::default()
        };
        let blocks = parse_schedule("9:00 pm - a\n10:00 pm - b");
        let entries = layout(&blocks, day(), &config);
        assert_eq!(entries[1].start, day().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn empty_blocks_give_empty_timeline() {
        assert!(layout(&[], day(), &TimelineConfig::default()).is_empty());
    }
}
