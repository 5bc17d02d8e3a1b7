//! Parsing and formatting of user-entered clock times.
//!
//! Accepted inputs, case-insensitive:
//! - 12-hour with minutes: `09:00 AM`, `9:30 pm`
//! - 24-hour with minutes: `14:30`
//! - a bare hour `0`..=`23`, meaning that hour on the dot

use chrono::NaiveTime;

use crate::error::ValidationError;

const TWELVE_HOUR: &str = "%I:%M %p";
const TWENTY_FOUR_HOUR: &str = "%H:%M";

/// Parse a user-entered time. Returns `None` for anything unrecognised.
pub fn parse_time_input(input: &str) -> Option<NaiveTime> {
    let normalized = input.trim().to_uppercase();
    if normalized.is_empty() {
        return None;
    }

    if normalized.contains("AM") || normalized.contains("PM") {
        NaiveTime::parse_from_str(&normalized, TWELVE_HOUR).ok()
    } else if normalized.contains(':') {
        NaiveTime::parse_from_str(&normalized, TWENTY_FOUR_HOUR).ok()
    } else {
        let hour: i64 = normalized.parse().ok()?;
        let hour = u32::try_from(hour).ok().filter(|h| *h <= 23)?;
        NaiveTime::from_hms_opt(hour, 0, 0)
    }
}

/// Like [`parse_time_input`] but reports what was wrong.
pub fn require_time(input: &str) -> Result<NaiveTime, ValidationError> {
    parse_time_input(input).ok_or_else(|| ValidationError::InvalidTime {
        input: input.trim().to_string(),
    })
}

/// Format as `09:00 AM`.
pub fn format_time_display(time: NaiveTime) -> String {
    time.format(TWELVE_HOUR).to_string()
}

/// One agenda line: `- 09:00 AM to 10:00 AM: Standup at Room 4`.
pub fn format_time_slot(start: &str, end: &str, title: &str, location: &str) -> String {
    if location.is_empty() {
        format!("- {start} to {end}: {title}")
    } else {
        format!("- {start} to {end}: {title} at {location}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn twelve_hour_inputs() {
        assert_eq!(parse_time_input("09:00 AM"), Some(hm(9, 0)));
        assert_eq!(parse_time_input(" 9:30 pm "), Some(hm(21, 30)));
        assert_eq!(parse_time_input("12:15 am"), Some(hm(0, 15)));
        assert_eq!(parse_time_input("12:00 PM"), Some(hm(12, 0)));
    }

    #[test]
    fn meridiem_without_space_is_accepted() {
        assert_eq!(parse_time_input("9:00AM"), Some(hm(9, 0)));
        assert_eq!(parse_time_input("9:30pm"), Some(hm(21, 30)));
    }

    #[test]
    fn twenty_four_hour_inputs() {
        assert_eq!(parse_time_input("14:30"), Some(hm(14, 30)));
        assert_eq!(parse_time_input("00:05"), Some(hm(0, 5)));
        assert_eq!(parse_time_input("24:00"), None);
    }

    #[test]
    fn bare_hours() {
        assert_eq!(parse_time_input("9"), Some(hm(9, 0)));
        assert_eq!(parse_time_input("0"), Some(hm(0, 0)));
        assert_eq!(parse_time_input("23"), Some(hm(23, 0)));
        assert_eq!(parse_time_input("24"), None);
        assert_eq!(parse_time_input("-1"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_time_input(""), None);
        assert_eq!(parse_time_input("   "), None);
        assert_eq!(parse_time_input("noon"), None);
        assert_eq!(parse_time_input("13:00 PM"), None);
        assert_eq!(parse_time_input("9 AM"), None);
        assert_eq!(parse_time_input("99999999999999999999"), None);
    }

    #[test]
    fn require_time_reports_input() {
        let err = require_time(" later ").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTime {
                input: "later".into()
            }
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(format_time_display(hm(9, 0)), "09:00 AM");
        assert_eq!(format_time_display(hm(15, 45)), "03:45 PM");
    }

    #[test]
    fn slot_format() {
        assert_eq!(
            format_time_slot("09:00 AM", "10:00 AM", "Standup (Meeting)", ""),
            "- 09:00 AM to 10:00 AM: Standup (Meeting)"
        );
        assert_eq!(
            format_time_slot("01:00 PM", "02:00 PM", "Lecture (Class)", "Hall B"),
            "- 01:00 PM to 02:00 PM: Lecture (Class) at Hall B"
        );
    }
}
