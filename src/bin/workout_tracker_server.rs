// ABOUTME: Server binary for the workout tracker REST service
// ABOUTME: Loads configuration, initializes logging and the database, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Tracker Server Binary
//!
//! Starts the HTTP API with configuration from environment variables,
//! optionally overridden on the command line.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use workout_tracker::{
    config::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};

#[derive(Parser)]
#[command(name = "workout-tracker-server")]
#[command(about = "Workout Tracker - REST API for workouts and exercises")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }
    if args.debug {
        config.debug = true;
        // Debug flag wins over any configured level
        std::env::set_var("RUST_LOG", "debug");
    }

    logging::init_from_env()?;

    info!("Starting Workout Tracker");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let resources = Arc::new(ServerResources::new(database, config));
    HttpServer::new(resources).serve().await
}
