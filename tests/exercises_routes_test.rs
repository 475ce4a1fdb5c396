// ABOUTME: Integration tests for the exercises REST API
// ABOUTME: Covers creation with normalization, validation failures, detail reads, and cascading deletes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{attach, create_exercise, create_test_app, create_workout, send_json};

#[tokio::test]
async fn test_create_exercise_normalizes_name_and_returns_201() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "  bench press  ", "category": "strength", "equipment_needed": true})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Bench Press");
    assert_eq!(body["category"], "strength");
    assert_eq!(body["equipment_needed"], true);
    assert!(body["id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_create_exercise_hyphenated_name_title_cased() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "push-ups", "category": "strength"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Push-Ups");
    // equipment_needed defaults false when omitted
    assert_eq!(body["equipment_needed"], false);
}

#[tokio::test]
async fn test_create_exercise_short_name_rejected() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "a", "category": "strength"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name: Length must be between 2 and 100.");
}

#[tokio::test]
async fn test_create_exercise_name_with_numbers_rejected() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "bench press 2", "category": "strength"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name: Exercise name should not contain numbers");
}

#[tokio::test]
async fn test_create_exercise_invalid_category_rejected() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "rowing", "category": "aqua"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "category: Must be one of: strength, cardio, flexibility, sports."
    );
}

#[tokio::test]
async fn test_create_exercise_uppercase_category_rejected() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "rowing", "category": "Cardio"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "category: Category must be lowercase");
}

#[tokio::test]
async fn test_create_exercise_missing_fields_all_reported() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "POST", "/exercises", Some(json!({}))).await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "name: Missing data for required field.; category: Missing data for required field."
    );
}

#[tokio::test]
async fn test_create_exercise_without_body_reports_missing_fields() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "POST", "/exercises", None).await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("name: Missing data for required field."));
    assert!(error.contains("category: Missing data for required field."));
}

#[tokio::test]
async fn test_create_exercise_duplicate_name_rejected() {
    let (app, _database) = create_test_app().await.unwrap();

    create_exercise(&app, "bench press", "strength").await.unwrap();

    // Differently-cased input collides after normalization.
    let (status, body) = send_json(
        &app,
        "POST",
        "/exercises",
        Some(json!({"name": "BENCH PRESS", "category": "strength"})),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Exercise name 'Bench Press' already exists");
}

#[tokio::test]
async fn test_list_exercises_in_insertion_order() {
    let (app, _database) = create_test_app().await.unwrap();

    let first = create_exercise(&app, "squats", "strength").await.unwrap();
    let second = create_exercise(&app, "running", "cardio").await.unwrap();
    let third = create_exercise(&app, "yoga flow", "flexibility").await.unwrap();

    let (status, body) = send_json(&app, "GET", "/exercises", None).await.unwrap();
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second, third]);
    assert_eq!(body[0]["name"], "Squats");
    assert_eq!(body[2]["name"], "Yoga Flow");
}

#[tokio::test]
async fn test_list_exercises_empty() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "GET", "/exercises", None).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_exercise_detail_includes_workouts() {
    let (app, _database) = create_test_app().await.unwrap();

    let exercise_id = create_exercise(&app, "plank", "strength").await.unwrap();
    let workout_id = create_workout(&app, 30).await.unwrap();
    let (status, _) = attach(&app, workout_id, exercise_id, Some(json!({"sets": 3}))).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, "GET", &format!("/exercises/{exercise_id}"), None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], exercise_id);
    assert_eq!(body["name"], "Plank");
    let workouts = body["workouts"].as_array().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0]["id"], workout_id);
    assert_eq!(workouts[0]["duration_minutes"], 30);
}

#[tokio::test]
async fn test_get_exercise_not_found_body() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "GET", "/exercises/9999", None).await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Exercise not found"}));
}

#[tokio::test]
async fn test_get_exercise_non_numeric_id_is_404() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "GET", "/exercises/abc", None).await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Resource not found"}));
}

#[tokio::test]
async fn test_delete_exercise_cascades_to_associations() {
    let (app, database) = create_test_app().await.unwrap();

    let exercise_id = create_exercise(&app, "burpees", "cardio").await.unwrap();
    let workout_id = create_workout(&app, 25).await.unwrap();
    attach(&app, workout_id, exercise_id, None).await.unwrap();

    let (status, body) = send_json(&app, "DELETE", &format!("/exercises/{exercise_id}"), None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Exercise deleted successfully"}));

    // Association rows are gone; the workout itself survives.
    assert!(database
        .workout_exercises()
        .find(workout_id, exercise_id)
        .await
        .unwrap()
        .is_none());
    assert!(database.workouts().get(workout_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_exercise_not_found() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "DELETE", "/exercises/42", None).await.unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Exercise not found"}));
}
