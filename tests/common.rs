// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database, router, and request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

//! Shared test utilities for `workout_tracker`

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::{Arc, Once};
use tower::ServiceExt;
use workout_tracker::{
    config::{DatabaseConfig, LogLevel, ServerConfig},
    database::Database,
    server::{router, ServerResources},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Configuration for tests; the port is never bound
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Warn,
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            auto_migrate: true,
        },
        debug: false,
    }
}

/// Build the full application router over a fresh in-memory database
///
/// The database handle is returned alongside for direct assertions.
pub async fn create_test_app() -> Result<(Router, Database)> {
    let database = create_test_database().await?;
    let resources = Arc::new(ServerResources::new(database.clone(), test_config()));
    Ok((router(resources), database))
}

/// Send a request and return the status plus parsed JSON body
pub async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(StatusCode, serde_json::Value)> {
    let (status, bytes) = send_raw(app, method, path, body).await?;
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}

/// Send a request and return the status plus raw body bytes
pub async fn send_raw(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(StatusCode, Vec<u8>)> {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => Request::builder().method(method).uri(path).body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

/// Create an exercise through the API, returning its id
pub async fn create_exercise(app: &Router, name: &str, category: &str) -> Result<i64> {
    let (status, body) = send_json(
        app,
        "POST",
        "/exercises",
        Some(serde_json::json!({"name": name, "category": category})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "create exercise failed: {body}");
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in {body}"))
}

/// Create a workout dated today through the API, returning its id
pub async fn create_workout(app: &Router, duration_minutes: i64) -> Result<i64> {
    let today = chrono::Utc::now().date_naive();
    let (status, body) = send_json(
        app,
        "POST",
        "/workouts",
        Some(serde_json::json!({
            "date": today.to_string(),
            "duration_minutes": duration_minutes
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED, "create workout failed: {body}");
    body["id"]
        .as_i64()
        .ok_or_else(|| anyhow::anyhow!("missing id in {body}"))
}

/// Attach an exercise to a workout through the API, returning the status and body
pub async fn attach(
    app: &Router,
    workout_id: i64,
    exercise_id: i64,
    body: Option<serde_json::Value>,
) -> Result<(StatusCode, serde_json::Value)> {
    send_json(
        app,
        "POST",
        &format!("/workouts/{workout_id}/exercises/{exercise_id}/workout_exercises"),
        body,
    )
    .await
}
