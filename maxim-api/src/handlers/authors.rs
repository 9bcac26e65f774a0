//! Author enumeration handler.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::state::AppState;

/// Distinct author names, sorted ascending.
///
/// Dedup is exact-case while the author lookup endpoint folds case; that
/// asymmetry is part of the service contract.
///
/// GET /authors
pub async fn list_authors(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.authors())
}
