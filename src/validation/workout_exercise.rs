// ABOUTME: Request-shape validation for workout-exercise attachment payloads
// ABOUTME: Range-checks optional reps, sets, and duration_seconds values
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{optional_integer, ValidationErrors};
use crate::models::NewWorkoutExercise;
use serde_json::Value;

/// Validate the optional per-pairing data attached to a workout exercise
///
/// All three fields may be absent or null. Range checks run alongside
/// redundant positivity checks mirroring them.
///
/// # Errors
///
/// Returns the accumulated field failures when any check fails
pub fn validate_workout_exercise(body: &Value) -> Result<NewWorkoutExercise, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let reps = optional_integer(body, "reps", &mut errors).map(|reps| {
        if !(1..=1000).contains(&reps) {
            errors.add(
                "reps",
                "Must be greater than or equal to 1 and less than or equal to 1000.",
            );
        }
        if reps <= 0 {
            errors.add("reps", "Reps must be a positive number");
        }
        reps
    });

    let sets = optional_integer(body, "sets", &mut errors).map(|sets| {
        if !(1..=50).contains(&sets) {
            errors.add(
                "sets",
                "Must be greater than or equal to 1 and less than or equal to 50.",
            );
        }
        if sets <= 0 {
            errors.add("sets", "Sets must be a positive number");
        }
        sets
    });

    let duration_seconds = optional_integer(body, "duration_seconds", &mut errors).map(|seconds| {
        if !(1..=7200).contains(&seconds) {
            errors.add(
                "duration_seconds",
                "Must be greater than or equal to 1 and less than or equal to 7200.",
            );
        }
        seconds
    });

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewWorkoutExercise {
        reps,
        sets,
        duration_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_valid() {
        let data = validate_workout_exercise(&json!({})).unwrap();
        assert_eq!(data.reps, None);
        assert_eq!(data.sets, None);
        assert_eq!(data.duration_seconds, None);
    }

    #[test]
    fn test_full_payload() {
        let data =
            validate_workout_exercise(&json!({"reps": 12, "sets": 3, "duration_seconds": 60}))
                .unwrap();
        assert_eq!(data.reps, Some(12));
        assert_eq!(data.sets, Some(3));
        assert_eq!(data.duration_seconds, Some(60));
    }

    #[test]
    fn test_range_boundaries() {
        assert!(validate_workout_exercise(&json!({"reps": 1000})).is_ok());
        assert!(validate_workout_exercise(&json!({"reps": 1001})).is_err());
        assert!(validate_workout_exercise(&json!({"sets": 50})).is_ok());
        assert!(validate_workout_exercise(&json!({"sets": 51})).is_err());
        assert!(validate_workout_exercise(&json!({"duration_seconds": 7200})).is_ok());
        assert!(validate_workout_exercise(&json!({"duration_seconds": 7201})).is_err());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let errors = validate_workout_exercise(&json!({"reps": 0})).unwrap_err();
        // Range check and positivity check both fire.
        assert_eq!(errors.len(), 2);

        assert!(validate_workout_exercise(&json!({"sets": -3})).is_err());
        assert!(validate_workout_exercise(&json!({"duration_seconds": 0})).is_err());
    }

    #[test]
    fn test_non_integer_rejected() {
        let errors = validate_workout_exercise(&json!({"reps": "twelve"})).unwrap_err();
        assert!(errors.has_field("reps"));
    }
}
