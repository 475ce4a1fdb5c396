// ABOUTME: Route handlers for the workouts REST API
// ABOUTME: Provides list, detail with nested exercise data, create, and cascading delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout routes
//!
//! The detail read expands the workout's association rows, each with its
//! exercise object; the delete cascades to the association rows.

use super::{exercises::ExerciseResponse, parse_id, MessageResponse};
use crate::{
    errors::AppError,
    models::{NewWorkout, Workout},
    server::ServerResources,
    validation::validate_workout,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Response for a workout
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// Unique identifier
    pub id: i64,
    /// ISO calendar date
    pub date: String,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Free-form notes
    pub notes: String,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            date: workout.date.to_string(),
            duration_minutes: workout.duration_minutes,
            notes: workout.notes,
        }
    }
}

/// An association row nested under a workout detail response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutExerciseEntry {
    /// Association identifier
    pub id: i64,
    /// The attached exercise
    pub exercise: ExerciseResponse,
    /// Repetitions per set, when recorded
    pub reps: Option<i64>,
    /// Number of sets, when recorded
    pub sets: Option<i64>,
    /// Duration in seconds, when recorded
    pub duration_seconds: Option<i64>,
}

/// Detail response: the workout plus its association rows in insertion order
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutDetailResponse {
    /// The workout itself
    #[serde(flatten)]
    pub workout: WorkoutResponse,
    /// Association rows with their exercises
    pub workout_exercises: Vec<WorkoutExerciseEntry>,
}

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts", get(Self::handle_list))
            .route("/workouts", post(Self::handle_create))
            .route("/workouts/:id", get(Self::handle_get))
            .route("/workouts/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /workouts - list all workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = resources.database.workouts().list().await?;
        let response: Vec<WorkoutResponse> = workouts.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /workouts/:id - one workout with its exercise data
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;

        let workout = resources
            .database
            .workouts()
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout not found"))?;

        let entries = resources
            .database
            .workout_exercises()
            .list_for_workout(id)
            .await?;

        let response = WorkoutDetailResponse {
            workout: workout.into(),
            workout_exercises: entries
                .into_iter()
                .map(|(association, exercise)| WorkoutExerciseEntry {
                    id: association.id,
                    exercise: exercise.into(),
                    reps: association.reps,
                    sets: association.sets,
                    duration_seconds: association.duration_seconds,
                })
                .collect(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /workouts - create a workout
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let body = body.map_or(Value::Null, |Json(v)| v);
        let today = chrono::Utc::now().date_naive();
        let payload = validate_workout(&body, today).map_err(AppError::from)?;

        // Entity-layer constraints re-checked independently of the validator.
        let workout = NewWorkout::new(payload.date, payload.duration_minutes, payload.notes)?;
        let created = resources.database.workouts().create(&workout).await?;

        let response: WorkoutResponse = created.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle DELETE /workouts/:id - delete a workout and cascade
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;
        let deleted = resources.database.workouts().delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("Workout not found"));
        }

        let response = MessageResponse {
            message: "Workout deleted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
