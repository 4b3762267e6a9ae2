//! Cipher History Server Library
//!
//! Stores and serves a user's history of cipher operations. This module
//! exports the core types and the router for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{open_database, HistoryStore};
pub use error::{AppError, Result};

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: HistoryStore,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState over an opened connection pool
    pub fn new(pool: sqlx::SqlitePool, config: Config) -> Self {
        Self {
            store: HistoryStore::new(pool),
            config,
        }
    }
}

/// Build the application router with CORS and optional request tracing
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(parse_origins(&state.config.allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let log_requests = state.config.log_requests;

    let router = Router::new()
        .route("/health", get(routes::health_check))
        .route(
            "/api/history",
            get(routes::list_history)
                .post(routes::create_history)
                .delete(routes::delete_history),
        )
        .route("/history", get(routes::history_page))
        .layer(cors)
        .with_state(state);

    if log_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect()
}
