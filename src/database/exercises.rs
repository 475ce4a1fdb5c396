// ABOUTME: Database operations for exercise rows
// ABOUTME: Handles CRUD with explicit cascade delete of association rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseCategory, NewExercise, Workout};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Exercise database operations manager
pub struct ExercisesManager {
    pool: SqlitePool,
}

/// Map a row from the exercises table
fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let category: String = row
        .try_get("category")
        .map_err(|e| AppError::database(format!("Failed to read exercise row: {e}")))?;

    Ok(Exercise {
        id: row
            .try_get("id")
            .map_err(|e| AppError::database(format!("Failed to read exercise row: {e}")))?,
        name: row
            .try_get("name")
            .map_err(|e| AppError::database(format!("Failed to read exercise row: {e}")))?,
        category: ExerciseCategory::parse(&category)
            .map_err(|_| AppError::database(format!("Invalid stored category '{category}'")))?,
        equipment_needed: row
            .try_get("equipment_needed")
            .map_err(|e| AppError::database(format!("Failed to read exercise row: {e}")))?,
    })
}

/// Map a row carrying workout columns
pub(crate) fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    Ok(Workout {
        id: row
            .try_get("id")
            .map_err(|e| AppError::database(format!("Failed to read workout row: {e}")))?,
        date: row
            .try_get("date")
            .map_err(|e| AppError::database(format!("Failed to read workout row: {e}")))?,
        duration_minutes: row
            .try_get("duration_minutes")
            .map_err(|e| AppError::database(format!("Failed to read workout row: {e}")))?,
        notes: row
            .try_get("notes")
            .map_err(|e| AppError::database(format!("Failed to read workout row: {e}")))?,
    })
}

impl ExercisesManager {
    /// Create a new exercises manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new exercise
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when the name is already taken, or a
    /// database error for any other failure
    pub async fn create(&self, exercise: &NewExercise) -> AppResult<Exercise> {
        let result = sqlx::query(
            "INSERT INTO exercises (name, category, equipment_needed) VALUES ($1, $2, $3)",
        )
        .bind(&exercise.name)
        .bind(exercise.category.as_str())
        .bind(exercise.equipment_needed)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error().is_some_and(|d| d.is_unique_violation()) {
                AppError::invalid_input(format!(
                    "Exercise name '{}' already exists",
                    exercise.name
                ))
            } else {
                AppError::database(format!("Failed to create exercise: {e}"))
            }
        })?;

        Ok(Exercise {
            id: result.last_insert_rowid(),
            name: exercise.name.clone(),
            category: exercise.category,
            equipment_needed: exercise.equipment_needed,
        })
    }

    /// Get an exercise by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get(&self, id: i64) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            "SELECT id, name, category, equipment_needed FROM exercises WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    /// List all exercises in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT id, name, category, equipment_needed FROM exercises ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    /// Delete an exercise and cascade to its association rows
    ///
    /// Both deletes run in one transaction: either the exercise and every
    /// workout_exercises row referencing it disappear together, or nothing
    /// changes. Returns false when the exercise does not exist.
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

        sqlx::query("DELETE FROM workout_exercises WHERE exercise_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to cascade delete: {e}")))?;

        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit delete: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// List the workouts that include this exercise, in attachment order
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn workouts_for(&self, exercise_id: i64) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT w.id, w.date, w.duration_minutes, w.notes
            FROM workouts w
            JOIN workout_exercises we ON we.workout_id = w.id
            WHERE we.exercise_id = $1
            ORDER BY we.id
            ",
        )
        .bind(exercise_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list workouts for exercise: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }
}
