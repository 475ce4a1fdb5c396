// ABOUTME: Database management for the workout tracker
// ABOUTME: Owns the SQLite pool, runs schema migrations, and exposes per-entity managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! This module owns the SQLite connection pool and the schema. Table-level
//! CHECK constraints duplicate the entity-layer rules (name length, category
//! enum, positive duration) so that invalid data is rejected at the storage
//! boundary even when the entity layer is bypassed.
//!
//! Cascade deletes are explicit: the managers delete association rows inside
//! the same transaction as the parent row rather than relying on foreign-key
//! actions.

/// Exercise persistence operations
pub mod exercises;

/// Workout persistence operations
pub mod workouts;

/// Workout-exercise association persistence operations
pub mod workout_exercises;

pub use exercises::ExercisesManager;
pub use workout_exercises::WorkoutExercisesManager;
pub use workouts::WorkoutsManager;

use anyhow::Result;
use sqlx::{Pool, Sqlite, SqlitePool};

/// Database handle for the workout tracker
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist;
        // in-memory databases need no creation mode
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Manager for exercise rows
    #[must_use]
    pub fn exercises(&self) -> ExercisesManager {
        ExercisesManager::new(self.pool.clone())
    }

    /// Manager for workout rows
    #[must_use]
    pub fn workouts(&self) -> WorkoutsManager {
        WorkoutsManager::new(self.pool.clone())
    }

    /// Manager for workout-exercise association rows
    #[must_use]
    pub fn workout_exercises(&self) -> WorkoutExercisesManager {
        WorkoutExercisesManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_exercises().await?;
        self.migrate_workouts().await?;
        self.migrate_workout_exercises().await?;
        Ok(())
    }

    async fn migrate_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                category TEXT NOT NULL,
                equipment_needed INTEGER NOT NULL DEFAULT 0,
                CONSTRAINT check_name_length CHECK (length(name) >= 2),
                CONSTRAINT check_valid_category
                    CHECK (category IN ('strength', 'cardio', 'flexibility', 'sports'))
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_workouts(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL DEFAULT (date('now')),
                duration_minutes INTEGER NOT NULL,
                notes TEXT NOT NULL DEFAULT '',
                CONSTRAINT check_positive_duration CHECK (duration_minutes > 0)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_workout_exercises(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_exercises (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                workout_id INTEGER NOT NULL REFERENCES workouts(id),
                exercise_id INTEGER NOT NULL REFERENCES exercises(id),
                reps INTEGER,
                sets INTEGER,
                duration_seconds INTEGER,
                CONSTRAINT unique_workout_exercise UNIQUE (workout_id, exercise_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout
             ON workout_exercises(workout_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_exercises_exercise
             ON workout_exercises(exercise_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) async fn create_test_db() -> Result<Database> {
        // Each in-memory connection gets its own isolated instance
        Database::new("sqlite::memory:").await
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() -> Result<()> {
        let db = create_test_db().await?;
        db.migrate().await?;
        db.migrate().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_check_constraints_reject_direct_writes() -> Result<()> {
        let db = create_test_db().await?;

        // Too-short name rejected at the storage boundary
        let result = sqlx::query("INSERT INTO exercises (name, category) VALUES ('a', 'cardio')")
            .execute(db.pool())
            .await;
        assert!(result.is_err());

        // Unknown category rejected at the storage boundary
        let result = sqlx::query("INSERT INTO exercises (name, category) VALUES ('Rowing', 'aqua')")
            .execute(db.pool())
            .await;
        assert!(result.is_err());

        // Non-positive duration rejected at the storage boundary
        let result = sqlx::query("INSERT INTO workouts (duration_minutes) VALUES (0)")
            .execute(db.pool())
            .await;
        assert!(result.is_err());

        Ok(())
    }
}
