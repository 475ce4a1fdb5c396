// ABOUTME: Route handlers for the exercises REST API
// ABOUTME: Provides list, detail with nested workouts, create, and cascading delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise routes
//!
//! The detail read expands the workouts the exercise appears in; the delete
//! cascades to the association rows while leaving workouts untouched.

use super::{parse_id, MessageResponse};
use crate::{
    errors::AppError,
    models::{Exercise, NewExercise, Workout},
    server::ServerResources,
    validation::validate_exercise,
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

/// Response for an exercise
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Unique identifier
    pub id: i64,
    /// Title-cased display name
    pub name: String,
    /// Lowercase category
    pub category: String,
    /// Whether equipment is needed
    pub equipment_needed: bool,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
            category: exercise.category.as_str().to_owned(),
            equipment_needed: exercise.equipment_needed,
        }
    }
}

/// Summary of a workout nested under an exercise detail response
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout identifier
    pub id: i64,
    /// ISO calendar date
    pub date: String,
    /// Duration in minutes
    pub duration_minutes: i64,
    /// Free-form notes
    pub notes: String,
}

impl From<Workout> for WorkoutSummary {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            date: workout.date.to_string(),
            duration_minutes: workout.duration_minutes,
            notes: workout.notes,
        }
    }
}

/// Detail response: the exercise plus the workouts it appears in
#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseDetailResponse {
    /// The exercise itself
    #[serde(flatten)]
    pub exercise: ExerciseResponse,
    /// Workouts including this exercise, in attachment order
    pub workouts: Vec<WorkoutSummary>,
}

/// Exercise routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", get(Self::handle_list))
            .route("/exercises", post(Self::handle_create))
            .route("/exercises/:id", get(Self::handle_get))
            .route("/exercises/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /exercises - list all exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = resources.database.exercises().list().await?;
        let response: Vec<ExerciseResponse> = exercises.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /exercises/:id - one exercise with its workouts
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;
        let manager = resources.database.exercises();

        let exercise = manager
            .get(id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise not found"))?;
        let workouts = manager.workouts_for(id).await?;

        let response = ExerciseDetailResponse {
            exercise: exercise.into(),
            workouts: workouts.into_iter().map(Into::into).collect(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /exercises - create an exercise
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<Value>>,
    ) -> Result<Response, AppError> {
        let body = body.map_or(Value::Null, |Json(v)| v);
        let payload = validate_exercise(&body).map_err(AppError::from)?;

        // Entity-layer normalization: trim, title-case, category parse.
        let exercise = NewExercise::new(&payload.name, &payload.category, payload.equipment_needed)?;
        let created = resources.database.exercises().create(&exercise).await?;

        let response: ExerciseResponse = created.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle DELETE /exercises/:id - delete an exercise and cascade
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let id = parse_id(&id)?;
        let deleted = resources.database.exercises().delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("Exercise not found"));
        }

        let response = MessageResponse {
            message: "Exercise deleted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
