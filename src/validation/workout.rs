// ABOUTME: Request-shape validation for workout creation payloads
// ABOUTME: Checks strict date format, the allowed date window, duration range, and notes shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{require_integer, require_string, ValidationErrors, NOT_A_STRING};
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

/// Strict date format accepted at the request boundary
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated workout creation payload
#[derive(Debug, Clone)]
pub struct WorkoutPayload {
    /// Parsed workout date
    pub date: NaiveDate,
    /// Duration in minutes (verified 1-480)
    pub duration_minutes: i64,
    /// Notes as supplied (verified shape), defaulting to empty
    pub notes: String,
}

/// Earliest accepted workout date: January 1 of (year of `today` - 2)
fn earliest_accepted(today: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(today.year() - 2, 1, 1)
}

/// Validate a workout creation payload against `today`
///
/// Checks run in a fixed order and every failure is recorded:
/// date required → strict year-month-day → not future → not older than
/// two years; duration_minutes required → integer → 1-480;
/// notes optional → ≤500 chars → no leading/trailing whitespace.
///
/// The notes check does not trim; a payload with padded notes is rejected,
/// not repaired.
///
/// # Errors
///
/// Returns the accumulated field failures when any check fails
pub fn validate_workout(body: &Value, today: NaiveDate) -> Result<WorkoutPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let date = require_string(body, "date", &mut errors).and_then(|raw| {
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => {
                if date > today {
                    errors.add("date", "Workout date cannot be in the future");
                } else if earliest_accepted(today).is_some_and(|earliest| date < earliest) {
                    errors.add("date", "Workout date cannot be more than 2 years old");
                }
                Some(date)
            }
            Err(_) => {
                errors.add("date", "Not a valid date.");
                None
            }
        }
    });

    let duration_minutes = require_integer(body, "duration_minutes", &mut errors).map(|minutes| {
        if !(1..=480).contains(&minutes) {
            errors.add(
                "duration_minutes",
                "Must be greater than or equal to 1 and less than or equal to 480.",
            );
        }
        minutes
    });

    let notes = match body.get("notes") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(notes)) => {
            if notes.chars().count() > 500 {
                errors.add("notes", "Longer than maximum length 500.");
            }
            if notes.trim() != notes {
                errors.add("notes", "Notes should not have leading or trailing whitespace");
            }
            notes.clone()
        }
        Some(_) => {
            errors.add("notes", NOT_A_STRING);
            String::new()
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(WorkoutPayload {
        date: date.unwrap_or_default(),
        duration_minutes: duration_minutes.unwrap_or_default(),
        notes,
    })
}
