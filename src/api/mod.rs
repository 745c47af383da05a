//! HTTP API module
//!
//! Local control surface for the timer: command endpoints, the status
//! snapshot, static content and the alert event stream.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/presets", get(presets_handler))
        .route("/select/:preset", post(select_handler))
        .route("/start", post(start_handler))
        .route("/toggle", post(toggle_handler))
        .route("/reset", post(reset_handler))
        .route("/status", get(status_handler))
        .route("/guide", get(guide_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
