//! Fixed appointments (meetings, classes) that a generated day must respect.
//!
//! The agenda is kept as `agenda.json` in the data directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::clock::{format_time_display, format_time_slot, require_time};
use crate::error::{Result, ValidationError};

/// Raw form input for a fixed event.
#[derive(Debug, Clone, Default)]
pub struct FixedEventInput {
    pub title: String,
    pub kind: String,
    pub start: String,
    pub end: String,
    pub location: String,
}

/// A validated fixed event. Times are stored display-formatted (`09:00 AM`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixedEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub location: String,
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

impl FixedEvent {
    /// Validate form input.
    ///
    /// # Errors
    /// `MissingField` for a blank title/type/start/end, `InvalidTime` for an
    /// unparsable time, `InvalidTimeRange` unless end is after start.
    pub fn from_input(input: &FixedEventInput) -> Result<Self, ValidationError> {
        let title = required(&input.title, "title")?;
        let kind = required(&input.kind, "type")?;
        let start = require_time(&required(&input.start, "start")?)?;
        let end = require_time(&required(&input.end, "end")?)?;

        if start >= end {
            return Err(ValidationError::InvalidTimeRange {
                start: format_time_display(start),
                end: format_time_display(end),
            });
        }

        Ok(Self {
            title,
            kind,
            start: format_time_display(start),
            end: format_time_display(end),
            location: input.location.trim().to_string(),
        })
    }

    /// Agenda line for this event.
    pub fn slot_line(&self) -> String {
        format_time_slot(
            &self.start,
            &self.end,
            &format!("{} ({})", self.title, self.kind),
            &self.location,
        )
    }
}

/// Ordered list of fixed events.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Agenda {
    #[serde(default)]
    events: Vec<FixedEvent>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, event: FixedEvent) {
        self.events.push(event);
    }

    /// Remove the event at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<FixedEvent> {
        (index < self.events.len()).then(|| self.events.remove(index))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[FixedEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// One slot line per event, newline separated. Empty agenda renders empty.
    pub fn render(&self) -> String {
        self.events
            .iter()
            .map(FixedEvent::slot_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Load from `path`. A missing file is an empty agenda.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, start: &str, end: &str) -> FixedEventInput {
        FixedEventInput {
            title: title.into(),
            kind: "Meeting".into(),
            start: start.into(),
            end: end.into(),
            location: String::new(),
        }
    }

    #[test]
    fn valid_event_is_normalized() {
        let event = FixedEvent::from_input(&FixedEventInput {
            location: " Online ".into(),
            ..input(" Team sync ", "9", "14:30")
        })
        .unwrap();
        assert_eq!(event.title, "Team sync");
        assert_eq!(event.start, "09:00 AM");
        assert_eq!(event.end, "02:30 PM");
        assert_eq!(event.location, "Online");
        assert_eq!(event.slot_line(), "- 09:00 AM to 02:30 PM: Team sync (Meeting) at Online");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            FixedEvent::from_input(&input("  ", "9", "10")),
            Err(ValidationError::MissingField("title"))
        );
        let mut no_kind = input("x", "9", "10");
        no_kind.kind.clear();
        assert_eq!(FixedEvent::from_input(&no_kind), Err(ValidationError::MissingField("type")));
        assert_eq!(
            FixedEvent::from_input(&input("x", "9", "")),
            Err(ValidationError::MissingField("end"))
        );
    }

    #[test]
    fn bad_times_are_rejected() {
        assert!(matches!(
            FixedEvent::from_input(&input("x", "soon", "10")),
            Err(ValidationError::InvalidTime { .. })
        ));
        assert!(matches!(
            FixedEvent::from_input(&input("x", "10:00 AM", "10:00")),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            FixedEvent::from_input(&input("x", "3 ", "1")),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn agenda_operations() {
        let mut agenda = Agenda::new();
        assert_eq!(agenda.render(), "");
        agenda.add(FixedEvent::from_input(&input("A", "9", "10")).unwrap());
        agenda.add(FixedEvent::from_input(&input("B", "11", "12")).unwrap());
        assert_eq!(agenda.len(), 2);
        assert_eq!(
            agenda.render(),
            "- 09:00 AM to 10:00 AM: A (Meeting)\n- 11:00 AM to 12:00 PM: B (Meeting)"
        );
        assert!(agenda.remove(5).is_none());
        assert_eq!(agenda.remove(0).map(|e| e.title), Some("A".to_string()));
        agenda.clear();
        assert!(agenda.is_empty());
    }

    #[test]
    fn persistence_roundtrip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.json");
        assert!(Agenda::load(&path).unwrap().is_empty());

        let mut agenda = Agenda::new();
        agenda.add(FixedEvent::from_input(&input("Lecture", "1:00 PM", "2:00 PM")).unwrap());
        agenda.save(&path).unwrap();
        assert_eq!(Agenda::load(&path).unwrap(), agenda);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agenda.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Agenda::load(&path).is_err());
    }
}
