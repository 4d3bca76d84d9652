//! API Router and Application State
//!
//! Central routing configuration and shared state.

pub mod awk;
pub mod error;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{any, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub use awk::{handle_awk, SlashResponse, SLASH_COMMAND};
pub use error::AwkError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    Router::new()
        // Slash command; other methods look like a missing route
        .route("/", post(handle_awk).fallback(not_found))
        // Liveness probe for checkers that can't just test the port
        .route("/healthz", any(health_check))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(max_body_size))
        // State
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> AwkError {
    AwkError::NotFound
}
