// ABOUTME: Database operations for workout rows
// ABOUTME: Handles CRUD with explicit cascade delete of association rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::exercises::row_to_workout;
use crate::errors::{AppError, AppResult};
use crate::models::{NewWorkout, Workout};
use sqlx::SqlitePool;

/// Workout database operations manager
pub struct WorkoutsManager {
    pool: SqlitePool,
}

impl WorkoutsManager {
    /// Create a new workouts manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new workout
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(&self, workout: &NewWorkout) -> AppResult<Workout> {
        let result = sqlx::query(
            "INSERT INTO workouts (date, duration_minutes, notes) VALUES ($1, $2, $3)",
        )
        .bind(workout.date)
        .bind(workout.duration_minutes)
        .bind(&workout.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workout: {e}")))?;

        Ok(Workout {
            id: result.last_insert_rowid(),
            date: workout.date,
            duration_minutes: workout.duration_minutes,
            notes: workout.notes.clone(),
        })
    }

    /// Get a workout by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Workout>> {
        let row = sqlx::query("SELECT id, date, duration_minutes, notes FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get workout: {e}")))?;

        row.as_ref().map(row_to_workout).transpose()
    }

    /// List all workouts in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query("SELECT id, date, duration_minutes, notes FROM workouts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Delete a workout and cascade to its association rows
    ///
    /// Both deletes run in one transaction. Returns false when the workout
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails; the transaction is
    /// rolled back
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to start transaction: {e}")))?;

        sqlx::query("DELETE FROM workout_exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to cascade delete: {e}")))?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete workout: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit delete: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
