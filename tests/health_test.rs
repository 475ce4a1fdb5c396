// ABOUTME: Integration test for the health endpoint
// ABOUTME: Verifies status and response shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use axum::http::StatusCode;

use common::{create_test_app, send_json};

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _database) = create_test_app().await.unwrap();

    let (status, body) = send_json(&app, "GET", "/health", None).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}
