//! API route definitions.
//!
//! This module defines all API routes and their handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;
use crate::handlers::{authors, health, quotes};
use crate::state::AppState;

/// Creates the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(quotes::random_quote))
        .route("/quotes", get(quotes::list_quotes))
        .route("/quotes/author/{author}", get(quotes::quotes_by_author))
        .route("/quotes/search", get(quotes::search_quotes))
        .route("/authors", get(authors::list_authors))
        .route("/health", get(health::health_check))
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if !config.enabled {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(config.max_age_secs))
}
