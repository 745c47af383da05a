//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::{
    error::TimerError,
    guide::{cooking_guide, CookingGuide},
    presets::Preset,
    state::{AppState, CommandOutcome, TimerSnapshot},
};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

pub type CommandResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

/// HTTP status for a rejected command
pub fn error_status(error: &TimerError) -> StatusCode {
    match error {
        TimerError::InvalidPreset(_) => StatusCode::NOT_FOUND,
        TimerError::NoPresetSelected => StatusCode::CONFLICT,
        TimerError::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turn a command result into a response, with separate messages for
/// applied and ignored outcomes
fn respond(
    state: &AppState,
    result: Result<(CommandOutcome, TimerSnapshot), TimerError>,
    applied: &str,
    ignored: &str,
) -> CommandResult {
    match result {
        Ok((outcome, timer)) => {
            let message = match outcome {
                CommandOutcome::Applied => applied,
                CommandOutcome::Ignored => ignored,
            };
            Ok(Json(ApiResponse::outcome(outcome, message.to_string(), timer)))
        }
        Err(e) => {
            warn!("Command rejected: {}", e);
            let timer = state.get_timer_state().unwrap_or_default();
            Err((error_status(&e), Json(ApiResponse::error(e.to_string(), timer))))
        }
    }
}

/// Handle GET /presets - List the doneness presets
pub async fn presets_handler() -> Json<&'static [Preset]> {
    Json(Preset::all())
}

/// Handle POST /select/:preset - Choose a doneness level
pub async fn select_handler(
    State(state): State<Arc<AppState>>,
    Path(preset): Path<String>,
) -> CommandResult {
    info!("Select endpoint called with preset '{}'", preset);
    respond(
        &state,
        state.select_preset(&preset),
        "Preset selected",
        "Timer is running, reset before choosing another preset",
    )
}

/// Handle POST /start - Start counting down the selected preset
pub async fn start_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    respond(&state, state.start(), "Timer started", "Timer already started")
}

/// Handle POST /toggle - Pause or resume the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    let result = state.pause_or_resume();
    let applied = match &result {
        Ok((_, timer)) if timer.is_running => "Timer resumed",
        _ => "Timer paused",
    };
    respond(&state, result, applied, "Nothing to pause or resume")
}

/// Handle POST /reset - Return to preset selection
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    respond(&state, state.reset(), "Timer reset", "Timer reset")
}

/// Handle GET /status - Return the current timer snapshot
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_state() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        progress_percent: timer.progress_percent(),
        timer,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /guide - Static cooking guide
pub async fn guide_handler() -> Json<&'static CookingGuide> {
    Json(cooking_guide())
}

/// Handle GET /events - Server-sent stream of interval and completion alerts
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let alert_rx = state.subscribe_alerts();

    let events = stream::unfold(alert_rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(alert) => {
                    let data = serde_json::to_string(&alert).unwrap_or_default();
                    let event = Event::default().event(alert.name()).data(data);
                    return Some((Ok::<_, Infallible>(event), rx));
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!("Event stream lagged, {} alerts dropped", missed);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
