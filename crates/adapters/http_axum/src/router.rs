//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes at `/` next to the welcome and health
/// endpoints. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn welcome() -> Json<[&'static str; 1]> {
    Json(["Welcome to the API"])
}

async fn health_check() -> &'static str {
    "OK"
}
