// ABOUTME: Router assembly and HTTP server lifecycle for the workout tracker
// ABOUTME: Merges entity routers, installs the JSON 404 fallback, and serves over TCP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Router assembly and server lifecycle

use crate::{
    config::ServerConfig,
    database::Database,
    errors::ErrorResponse,
    routes::{ExerciseRoutes, HealthRoutes, WorkoutExerciseRoutes, WorkoutRoutes},
};
use anyhow::Result;
use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resources handed to every route handler
pub struct ServerResources {
    /// Database handle
    pub database: Database,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the database and configuration for the routers
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// Fallback for unmatched routes: `{"error": "Resource not found"}`
async fn not_found_fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Resource not found".to_owned(),
        }),
    )
}

/// Assemble the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(WorkoutRoutes::routes(resources.clone()))
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(WorkoutExerciseRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .fallback(not_found_fallback)
        .layer(TraceLayer::new_for_http())
}

/// HTTP server wrapper
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new server from shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the configured port and serve until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if binding or serving fails
    pub async fn serve(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let app = router(self.resources);

        let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
        info!("HTTP server listening on port {port}");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
