// ABOUTME: Association entity linking a workout to an exercise with per-pairing data
// ABOUTME: Carries optional reps, sets, and duration for one exercise within one workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

/// A stored workout-exercise association row
///
/// The (workout_id, exercise_id) pair is unique: an exercise appears at most
/// once per workout. Rows are created only through the attach operation and
/// removed only by parent cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Surrogate key
    pub id: i64,
    /// Parent workout
    pub workout_id: i64,
    /// Attached exercise
    pub exercise_id: i64,
    /// Repetitions per set, when applicable (1-1000)
    pub reps: Option<i64>,
    /// Number of sets, when applicable (1-50)
    pub sets: Option<i64>,
    /// Duration in seconds, when applicable (1-7200)
    pub duration_seconds: Option<i64>,
}

/// Per-pairing data for a new association
#[derive(Debug, Clone, Default)]
pub struct NewWorkoutExercise {
    /// Repetitions per set
    pub reps: Option<i64>,
    /// Number of sets
    pub sets: Option<i64>,
    /// Duration in seconds
    pub duration_seconds: Option<i64>,
}
