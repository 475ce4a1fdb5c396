// ABOUTME: Route handler for attaching an exercise to a workout
// ABOUTME: Verifies both parents, rejects duplicate pairs, and validates per-pairing data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout-exercise attachment route
//!
//! This is the only way association rows are created. Failure precedence
//! mirrors the lookup order: missing workout, missing exercise, duplicate
//! pair, then payload validation.

use super::parse_id;
use crate::{
    errors::AppError, models::WorkoutExercise, server::ServerResources,
    validation::validate_workout_exercise,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Response for a created association
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutExerciseResponse {
    /// Association identifier
    pub id: i64,
    /// Parent workout
    pub workout_id: i64,
    /// Attached exercise
    pub exercise_id: i64,
    /// Repetitions per set, when recorded
    pub reps: Option<i64>,
    /// Number of sets, when recorded
    pub sets: Option<i64>,
    /// Duration in seconds, when recorded
    pub duration_seconds: Option<i64>,
}

impl From<WorkoutExercise> for WorkoutExerciseResponse {
    fn from(association: WorkoutExercise) -> Self {
        Self {
            id: association.id,
            workout_id: association.workout_id,
            exercise_id: association.exercise_id,
            reps: association.reps,
            sets: association.sets,
            duration_seconds: association.duration_seconds,
        }
    }
}

/// Workout-exercise routes handler
pub struct WorkoutExerciseRoutes;

impl WorkoutExerciseRoutes {
    /// Create the attachment route
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/workouts/:workout_id/exercises/:exercise_id/workout_exercises",
                post(Self::handle_attach),
            )
            .with_state(resources)
    }

    /// Handle POST /workouts/:workout_id/exercises/:exercise_id/workout_exercises
    async fn handle_attach(
        State(resources): State<Arc<ServerResources>>,
        Path((workout_id, exercise_id)): Path<(String, String)>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let workout_id = parse_id(&workout_id)?;
        let exercise_id = parse_id(&exercise_id)?;

        if resources.database.workouts().get(workout_id).await?.is_none() {
            return Err(AppError::not_found("Workout not found"));
        }
        if resources
            .database
            .exercises()
            .get(exercise_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found("Exercise not found"));
        }

        let manager = resources.database.workout_exercises();
        if manager.find(workout_id, exercise_id).await?.is_some() {
            return Err(AppError::conflict("Exercise already added to this workout"));
        }

        // Absent body is equivalent to an empty object: all fields optional.
        let body = body.map_or(Value::Null, |Json(v)| v);
        let data = validate_workout_exercise(&body).map_err(AppError::from)?;

        let created = manager.attach(workout_id, exercise_id, &data).await?;

        let response: WorkoutExerciseResponse = created.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }
}
