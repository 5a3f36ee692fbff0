//! Tournament Catalog Server
//!
//! An Axum web server over a single SQLite table of tournaments:
//! - REST endpoints to list and filter tournaments
//! - Sport and level catalogs
//! - Server-side CSV and JSON exports
//! - A server-rendered landing page

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod middleware;
pub mod repo;
pub mod seed;
pub mod templates;

use axum::routing::get;
use axum::Router;
use db::DbPool;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection handle.
    pub db: DbPool,
    /// Directory receiving export files.
    pub output_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DbPool, output_dir: PathBuf) -> Self {
        Self { db, output_dir }
    }
}

/// Health check endpoint.
///
/// Returns "ok" to indicate the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Builds the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    // CORS layer for cross-origin requests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::landing::index))
        .route("/health", get(health))
        .route("/api/tournaments", get(api::tournaments::list_tournaments))
        .route("/api/sports", get(api::catalog::list_sports))
        .route("/api/levels", get(api::catalog::list_levels))
        .route("/api/export/csv", get(api::export::export_csv))
        .route("/api/export/json", get(api::export::export_json))
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::request_timing))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_returns_ok() {
        let result = health().await;
        assert_eq!(result, "ok");
    }
}
