// ABOUTME: Request payload validation module organization
// ABOUTME: Provides the accumulated field-error type and per-entity validators
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-shape validation
//!
//! Validators here check externally supplied payloads before persistence is
//! attempted, independently of the entity-layer rules. Checks run as an
//! explicit ordered sequence per entity and accumulate every failure into
//! [`ValidationErrors`] rather than stopping at the first.

/// Exercise payload validator
pub mod exercise;

/// Workout payload validator
pub mod workout;

/// Workout-exercise payload validator
pub mod workout_exercise;

pub use exercise::{validate_exercise, ExercisePayload};
pub use workout::{validate_workout, WorkoutPayload};
pub use workout_exercise::validate_workout_exercise;

use crate::errors::AppError;
use serde_json::Value;
use std::fmt;

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name in the request payload
    pub field: String,
    /// Human-readable failure message
    pub message: String,
}

/// An ordered set of field→message validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Create an empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_owned(),
            message: message.into(),
        });
    }

    /// Whether any failure was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded failures
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate failures in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether any failure was recorded against the given field
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::invalid_input(errors.to_string())
    }
}

/// Standard message for a required field absent from the payload
pub(crate) const MISSING_FIELD: &str = "Missing data for required field.";

/// Standard message for a value that is not a string
pub(crate) const NOT_A_STRING: &str = "Not a valid string.";

/// Standard message for a value that is not an integer
pub(crate) const NOT_AN_INTEGER: &str = "Not a valid integer.";

/// Standard message for a value that is not a boolean
pub(crate) const NOT_A_BOOLEAN: &str = "Not a valid boolean.";

/// Extract a string field, recording missing/type failures
///
/// Returns `None` when the field is absent or not a string; the matching
/// failure has already been recorded in that case.
pub(crate) fn require_string<'a>(
    body: &'a Value,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, MISSING_FIELD);
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.add(field, NOT_A_STRING);
            None
        }
    }
}

/// Extract a required integer field, recording missing/type failures
pub(crate) fn require_integer(
    body: &Value,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.add(field, MISSING_FIELD);
            None
        }
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(_) => {
            errors.add(field, NOT_AN_INTEGER);
            None
        }
    }
}

/// Extract an optional integer field; absent and null are both accepted
pub(crate) fn optional_integer(
    body: &Value,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) if n.is_i64() => n.as_i64(),
        Some(_) => {
            errors.add(field, NOT_AN_INTEGER);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_errors_accumulate_in_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "first");
        errors.add("category", "second");
        assert_eq!(errors.len(), 2);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "category"]);
    }

    #[test]
    fn test_display_joins_field_messages() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "too short");
        errors.add("category", "unknown");
        assert_eq!(errors.to_string(), "name: too short; category: unknown");
    }

    #[test]
    fn test_require_string_rejects_number() {
        let body = json!({"name": 7});
        let mut errors = ValidationErrors::new();
        assert!(require_string(&body, "name", &mut errors).is_none());
        assert!(errors.has_field("name"));
    }

    #[test]
    fn test_optional_integer_accepts_null() {
        let body = json!({"reps": null});
        let mut errors = ValidationErrors::new();
        assert_eq!(optional_integer(&body, "reps", &mut errors), None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_require_integer_rejects_float() {
        let body = json!({"duration_minutes": 30.5});
        let mut errors = ValidationErrors::new();
        assert!(require_integer(&body, "duration_minutes", &mut errors).is_none());
        assert!(errors.has_field("duration_minutes"));
    }
}
