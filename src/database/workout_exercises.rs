// ABOUTME: Database operations for workout-exercise association rows
// ABOUTME: Handles attachment with conflict detection and insertion-order listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseCategory, NewWorkoutExercise, WorkoutExercise};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Workout-exercise association database operations manager
pub struct WorkoutExercisesManager {
    pool: SqlitePool,
}

fn row_to_association(row: &SqliteRow) -> AppResult<WorkoutExercise> {
    let read_err = |e: sqlx::Error| AppError::database(format!("Failed to read association row: {e}"));
    Ok(WorkoutExercise {
        id: row.try_get("id").map_err(read_err)?,
        workout_id: row.try_get("workout_id").map_err(read_err)?,
        exercise_id: row.try_get("exercise_id").map_err(read_err)?,
        reps: row.try_get("reps").map_err(read_err)?,
        sets: row.try_get("sets").map_err(read_err)?,
        duration_seconds: row.try_get("duration_seconds").map_err(read_err)?,
    })
}

impl WorkoutExercisesManager {
    /// Create a new associations manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the association for a (workout, exercise) pair
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find(&self, workout_id: i64, exercise_id: i64) -> AppResult<Option<WorkoutExercise>> {
        let row = sqlx::query(
            r"
            SELECT id, workout_id, exercise_id, reps, sets, duration_seconds
            FROM workout_exercises
            WHERE workout_id = $1 AND exercise_id = $2
            ",
        )
        .bind(workout_id)
        .bind(exercise_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to look up association: {e}")))?;

        row.as_ref().map(row_to_association).transpose()
    }

    /// Attach an exercise to a workout
    ///
    /// Runs inside a transaction: both parents are re-verified and the pair
    /// is re-checked for a conflict immediately before insertion, so the
    /// cross-entity invariants hold even if state changed after the caller's
    /// own lookups. Any failure rolls the transaction back.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when a parent is missing, a conflict error
    /// when the pair already exists, or a database error otherwise
    pub async fn attach(
        &self,
        workout_id: i64,
        exercise_id: i64,
        data: &NewWorkoutExercise,
    ) -> AppResult<WorkoutExercise> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to start transaction: {e}")))?;

        let workout_exists = sqlx::query("SELECT id FROM workouts WHERE id = $1")
            .bind(workout_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to verify workout: {e}")))?
            .is_some();
        if !workout_exists {
            return Err(AppError::not_found("Workout not found"));
        }

        let exercise_exists = sqlx::query("SELECT id FROM exercises WHERE id = $1")
            .bind(exercise_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to verify exercise: {e}")))?
            .is_some();
        if !exercise_exists {
            return Err(AppError::not_found("Exercise not found"));
        }

        let pair_exists = sqlx::query(
            "SELECT id FROM workout_exercises WHERE workout_id = $1 AND exercise_id = $2",
        )
        .bind(workout_id)
        .bind(exercise_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to check for existing pair: {e}")))?
        .is_some();
        if pair_exists {
            return Err(AppError::conflict("Exercise already added to this workout"));
        }

        let result = sqlx::query(
            r"
            INSERT INTO workout_exercises (workout_id, exercise_id, reps, sets, duration_seconds)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(workout_id)
        .bind(exercise_id)
        .bind(data.reps)
        .bind(data.sets)
        .bind(data.duration_seconds)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::conflict("Exercise already added to this workout")
            } else {
                AppError::database(format!("Failed to create association: {e}"))
            }
        })?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit association: {e}")))?;

        Ok(WorkoutExercise {
            id: result.last_insert_rowid(),
            workout_id,
            exercise_id,
            reps: data.reps,
            sets: data.sets,
            duration_seconds: data.duration_seconds,
        })
    }

    /// List a workout's associations with their exercises, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_for_workout(
        &self,
        workout_id: i64,
    ) -> AppResult<Vec<(WorkoutExercise, Exercise)>> {
        let rows = sqlx::query(
            r"
            SELECT we.id, we.workout_id, we.exercise_id, we.reps, we.sets, we.duration_seconds,
                   e.name, e.category, e.equipment_needed
            FROM workout_exercises we
            JOIN exercises e ON e.id = we.exercise_id
            WHERE we.workout_id = $1
            ORDER BY we.id
            ",
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workout exercises: {e}")))?;

        rows.iter()
            .map(|row| {
                let association = row_to_association(row)?;
                let read_err =
                    |e: sqlx::Error| AppError::database(format!("Failed to read exercise row: {e}"));
                let category: String = row.try_get("category").map_err(read_err)?;
                let exercise = Exercise {
                    id: association.exercise_id,
                    name: row.try_get("name").map_err(read_err)?,
                    category: ExerciseCategory::parse(&category).map_err(|_| {
                        AppError::database(format!("Invalid stored category '{category}'"))
                    })?,
                    equipment_needed: row.try_get("equipment_needed").map_err(read_err)?,
                };
                Ok((association, exercise))
            })
            .collect()
    }

    /// Count association rows for a (workout, exercise) pair
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn count_for_pair(&self, workout_id: i64, exercise_id: i64) -> AppResult<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS n FROM workout_exercises WHERE workout_id = $1 AND exercise_id = $2",
        )
        .bind(workout_id)
        .bind(exercise_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count associations: {e}")))?;

        row.try_get("n")
            .map_err(|e| AppError::database(format!("Failed to read count: {e}")))
    }
}
