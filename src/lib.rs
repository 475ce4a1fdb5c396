// ABOUTME: Main library entry point for the workout tracker REST service
// ABOUTME: Exposes entity, validation, persistence, and route layers for the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Workout Tracker
//!
//! A small REST service for tracking workouts and exercises backed by SQLite.
//! Three entities are exposed over HTTP/JSON: exercises, workouts, and the
//! association rows carrying per-pairing data (reps, sets, duration).
//!
//! ## Architecture
//!
//! The service is organized as four thin layers:
//! - **Models**: canonical entity types plus write-time normalization
//! - **Validation**: request-shape validators accumulating field errors
//! - **Database**: sqlx-backed managers with explicit cascade deletes
//! - **Routes**: axum handlers mapping HTTP operations to the layers above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workout_tracker::config::ServerConfig;
//! use workout_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Workout tracker configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Database management and per-entity persistence managers
pub mod database;

/// Unified error handling: error codes, `AppError`, and HTTP response mapping
pub mod errors;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// Entity types and write-time normalization rules
pub mod models;

/// `HTTP` route handlers organized by entity
pub mod routes;

/// Router assembly and HTTP server lifecycle
pub mod server;

/// Request payload validation with accumulated field errors
pub mod validation;
