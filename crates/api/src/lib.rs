//! # Spabook API
//!
//! The API crate provides the web server for the spa booking service. It
//! exposes endpoints for spa lookup, day availability, and booking
//! submission.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic over the core
//!   availability engine
//! - **Middleware**: Provide cross-cutting concerns like error handling
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions; all availability decisions are delegated to
//! `spabook-core`, with the current time captured once per request.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use spabook_core::cache::KeyedCache;
use spabook_db::models::DbSpa;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

/// Shared application state that is accessible to all request handlers.
///
/// Besides the connection pool this carries the spa detail cache: spa rows
/// change rarely, so they are cached under an explicit keep-until-cleared
/// policy instead of being re-fetched on every availability request.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Spa details keyed by id, retained until cleared
    pub spa_cache: RwLock<KeyedCache<Uuid, DbSpa>>,
}

impl ApiState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            spa_cache: RwLock::new(KeyedCache::new()),
        }
    }
}

/// Starts the API server with the provided configuration and database
/// connection: initializes logging, builds the router, and serves until
/// shutdown.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(db_pool));

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Spa lookup endpoints
        .merge(routes::spa::routes())
        // Day availability endpoints
        .merge(routes::availability::routes())
        // Booking submission endpoints
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
