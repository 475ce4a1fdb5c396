// ABOUTME: Demo data seeder for the workout tracker database
// ABOUTME: Clears and repopulates exercises, workouts, and their associations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demo data seeder for the workout tracker.
//!
//! This binary populates the database with a realistic sample set: a dozen
//! exercises across all four categories, a week of workouts, and the
//! per-workout exercise data linking them.
//!
//! Usage:
//! ```bash
//! # Seed the default database
//! cargo run --bin seed-demo-data
//!
//! # Seed a specific database
//! cargo run --bin seed-demo-data -- --database-url sqlite:./data/workouts.db
//! ```

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use clap::Parser;
use std::collections::HashMap;
use tracing::info;
use workout_tracker::{
    config::ServerConfig,
    database::Database,
    models::{NewExercise, NewWorkout, NewWorkoutExercise},
};

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Workout Tracker Demo Data Seeder",
    long_about = "Clear and repopulate the database with sample workouts and exercises"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Demo exercise configuration
struct DemoExercise {
    name: &'static str,
    category: &'static str,
    equipment_needed: bool,
}

const DEMO_EXERCISES: &[DemoExercise] = &[
    DemoExercise { name: "push-ups", category: "strength", equipment_needed: false },
    DemoExercise { name: "squats", category: "strength", equipment_needed: false },
    DemoExercise { name: "deadlifts", category: "strength", equipment_needed: true },
    DemoExercise { name: "bench press", category: "strength", equipment_needed: true },
    DemoExercise { name: "running", category: "cardio", equipment_needed: false },
    DemoExercise { name: "cycling", category: "cardio", equipment_needed: true },
    DemoExercise { name: "yoga flow", category: "flexibility", equipment_needed: false },
    DemoExercise { name: "stretching", category: "flexibility", equipment_needed: false },
    DemoExercise { name: "basketball", category: "sports", equipment_needed: true },
    DemoExercise { name: "swimming", category: "cardio", equipment_needed: false },
    DemoExercise { name: "plank", category: "strength", equipment_needed: false },
    DemoExercise { name: "burpees", category: "cardio", equipment_needed: false },
];

/// Demo workout configuration: (days ago, duration, notes)
const DEMO_WORKOUTS: &[(i64, i64, &str)] = &[
    (7, 45, "Great upper body workout"),
    (5, 60, "Leg day - felt strong"),
    (3, 30, "Quick cardio session"),
    (1, 50, "Full body workout"),
    (0, 35, "Morning flexibility routine"),
];

/// Demo association configuration: (workout index, exercise name, reps, sets, seconds)
///
/// Exercise names are the title-cased forms produced by entity normalization.
const DEMO_ASSOCIATIONS: &[(usize, &str, Option<i64>, Option<i64>, Option<i64>)] = &[
    // Upper body, 7 days ago
    (0, "Push-Ups", Some(15), Some(3), None),
    (0, "Bench Press", Some(10), Some(4), None),
    (0, "Plank", None, Some(3), Some(60)),
    // Leg day, 5 days ago
    (1, "Squats", Some(20), Some(4), None),
    (1, "Deadlifts", Some(8), Some(3), None),
    // Cardio, 3 days ago
    (2, "Running", None, None, Some(1800)),
    (2, "Burpees", Some(10), Some(5), None),
    // Full body, 1 day ago
    (3, "Push-Ups", Some(12), Some(3), None),
    (3, "Squats", Some(15), Some(3), None),
    (3, "Plank", None, Some(3), Some(45)),
    (3, "Cycling", None, None, Some(900)),
    // Flexibility, today
    (4, "Yoga Flow", None, None, Some(2100)),
];

async fn clear_data(database: &Database) -> Result<()> {
    info!("Clearing existing data");
    sqlx::query("DELETE FROM workout_exercises")
        .execute(database.pool())
        .await?;
    sqlx::query("DELETE FROM workouts").execute(database.pool()).await?;
    sqlx::query("DELETE FROM exercises").execute(database.pool()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(level).init();

    let database_url = match args.database_url {
        Some(url) => url,
        None => ServerConfig::from_env()?.database.url,
    };

    info!("Seeding database at {database_url}");
    let database = Database::new(&database_url).await?;

    clear_data(&database).await?;

    // Exercises; remember ids by their normalized names
    let exercises = database.exercises();
    let mut exercise_ids: HashMap<String, i64> = HashMap::new();
    for demo in DEMO_EXERCISES {
        let exercise = NewExercise::new(demo.name, demo.category, demo.equipment_needed)?;
        let created = exercises.create(&exercise).await?;
        exercise_ids.insert(created.name.clone(), created.id);
    }
    info!("Added {} exercises", DEMO_EXERCISES.len());

    // Workouts over the past week
    let workouts = database.workouts();
    let today = Utc::now().date_naive();
    let mut workout_ids = Vec::new();
    for &(days_ago, duration, notes) in DEMO_WORKOUTS {
        let workout =
            NewWorkout::new(today - Duration::days(days_ago), duration, notes.to_owned())?;
        let created = workouts.create(&workout).await?;
        workout_ids.push(created.id);
    }
    info!("Added {} workouts", DEMO_WORKOUTS.len());

    // Associations
    let associations = database.workout_exercises();
    for &(workout_index, exercise_name, reps, sets, duration_seconds) in DEMO_ASSOCIATIONS {
        let workout_id = workout_ids[workout_index];
        let exercise_id = *exercise_ids
            .get(exercise_name)
            .ok_or_else(|| anyhow!("Could not find exercise: {exercise_name}"))?;
        let data = NewWorkoutExercise {
            reps,
            sets,
            duration_seconds,
        };
        associations.attach(workout_id, exercise_id, &data).await?;
    }
    info!(
        "Added {} workout-exercise relationships",
        DEMO_ASSOCIATIONS.len()
    );

    info!("Database seeding completed successfully");
    Ok(())
}
