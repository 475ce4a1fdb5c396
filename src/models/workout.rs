// ABOUTME: Workout entity with duration and notes constraints
// ABOUTME: Enforces the 1-480 minute duration range and the 500 character notes cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum workout duration in minutes (8 hours)
pub const MAX_DURATION_MINUTES: i64 = 480;

/// Maximum notes length in characters
pub const MAX_NOTES_LENGTH: usize = 500;

/// A stored workout row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Surrogate key
    pub id: i64,
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Duration in minutes (1-480)
    pub duration_minutes: i64,
    /// Free-form notes, empty string when absent
    pub notes: String,
}

/// A validated workout ready for insertion
#[derive(Debug, Clone)]
pub struct NewWorkout {
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Free-form notes
    pub notes: String,
}

impl NewWorkout {
    /// Build a new workout, applying entity-level constraints
    ///
    /// Duration and notes are checked here independently of request
    /// validation. Date-window rules (not future, not older than two years)
    /// are a request-shape concern and live in the validation layer.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an out-of-range duration or
    /// over-long notes
    pub fn new(date: NaiveDate, duration_minutes: i64, notes: String) -> AppResult<Self> {
        if duration_minutes <= 0 {
            return Err(AppError::invalid_input("Duration must be a positive number"));
        }
        if duration_minutes > MAX_DURATION_MINUTES {
            return Err(AppError::invalid_input(
                "Duration cannot exceed 480 minutes (8 hours)",
            ));
        }
        if notes.chars().count() > MAX_NOTES_LENGTH {
            return Err(AppError::invalid_input("Notes cannot exceed 500 characters"));
        }

        Ok(Self {
            date,
            duration_minutes,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_duration_bounds() {
        assert!(NewWorkout::new(date(), 0, String::new()).is_err());
        assert!(NewWorkout::new(date(), -5, String::new()).is_err());
        assert!(NewWorkout::new(date(), 481, String::new()).is_err());
        assert!(NewWorkout::new(date(), 1, String::new()).is_ok());
        assert!(NewWorkout::new(date(), 480, String::new()).is_ok());
    }

    #[test]
    fn test_notes_length_cap() {
        let long = "x".repeat(501);
        assert!(NewWorkout::new(date(), 30, long).is_err());
        let exact = "x".repeat(500);
        assert!(NewWorkout::new(date(), 30, exact).is_ok());
    }
}
