// ABOUTME: Route module organization for the workout tracker HTTP endpoints
// ABOUTME: Provides route definitions organized by entity with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route modules
//!
//! Each entity gets its own module containing route definitions and thin
//! handlers that delegate to the validation and database layers. Every
//! handler follows the same shape: look up required parents (404), validate
//! the payload (400), persist (409/400), serialize.

/// Exercise endpoints
pub mod exercises;

/// Health check endpoints
pub mod health;

/// Workout-exercise attachment endpoint
pub mod workout_exercises;

/// Workout endpoints
pub mod workouts;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use workout_exercises::WorkoutExerciseRoutes;
pub use workouts::WorkoutRoutes;

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Response body for successful deletes: `{"message": ...}`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}

/// Parse a path segment as an entity id
///
/// Mirrors strict route matching: a non-numeric id means the path matches no
/// resource, so the failure is the generic routing 404 rather than a 400.
pub(crate) fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::not_found("Resource not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_numeric() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_id_rejects_non_numeric() {
        let error = parse_id("abc").unwrap_err();
        assert_eq!(error.message, "Resource not found");
    }
}
