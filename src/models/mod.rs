// ABOUTME: Entity type module organization for the workout tracker
// ABOUTME: Re-exports exercise, workout, and association entity types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entity types and write-time normalization
//!
//! These types define the canonical storage shape of each entity together
//! with write-time normalization rules. The rules here are independent of
//! request validation: a direct storage write through these constructors
//! still cannot violate the data invariants.

/// Exercise entity and category enum
pub mod exercise;

/// Workout entity
pub mod workout;

/// Workout-exercise association entity
pub mod workout_exercise;

pub use exercise::{Exercise, ExerciseCategory, NewExercise};
pub use workout::{NewWorkout, Workout};
pub use workout_exercise::{NewWorkoutExercise, WorkoutExercise};
