//! Time-of-day reminders from a saved `[{"time": "HH:MM", "task": ...}]` file.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReminderItem {
    /// 24-hour `HH:MM`, compared as text.
    pub time: String,
    pub task: String,
}

/// Reminders whose time is exactly `now` to the minute.
pub fn due(items: &[ReminderItem], now: NaiveTime) -> Vec<&ReminderItem> {
    let stamp = now.format("%H:%M").to_string();
    items.iter().filter(|item| item.time == stamp).collect()
}

/// Read reminders from `path`.
///
/// Reminders are best effort: an unreadable or malformed file yields no
/// reminders and a warning.
pub fn load_reminders(path: &Path) -> Vec<ReminderItem> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read reminders");
            return Vec::new();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "malformed reminders file");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(time: &str, task: &str) -> ReminderItem {
        ReminderItem {
            time: time.into(),
            task: task.into(),
        }
    }

    #[test]
    fn matches_exact_minute() {
        let items = vec![item("09:00", "Standup"), item("09:01", "Email"), item("9:00", "Loose")];
        let now = NaiveTime::from_hms_opt(9, 0, 42).unwrap();
        let hits = due(&items, now);
        assert_eq!(hits, vec![&items[0]]);
    }

    #[test]
    fn nothing_due() {
        let items = vec![item("13:30", "Lunch")];
        assert!(due(&items, NaiveTime::from_hms_opt(13, 31, 0).unwrap()).is_empty());
    }

    #[test]
    fn missing_or_bad_file_gives_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_schedule.json");
        assert!(load_reminders(&path).is_empty());

        std::fs::write(&path, "[{\"time\": 5}]").unwrap();
        assert!(load_reminders(&path).is_empty());
    }

    #[test]
    fn loads_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_schedule.json");
        std::fs::write(&path, r#"[{"time": "07:15", "task": "Stretch"}]"#).unwrap();
        assert_eq!(load_reminders(&path), vec![item("07:15", "Stretch")]);
    }
}
