//! Alert renderer background task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

use crate::{
    alerts::{fire_alert, AlertConfig},
    state::AppState,
};

/// Background task that renders every alert signal the countdown emits
pub async fn alert_renderer_task(state: Arc<AppState>, config: AlertConfig) {
    info!("Starting alert renderer task (bell={})", config.bell);

    let mut alert_rx = state.subscribe_alerts();

    loop {
        match alert_rx.recv().await {
            Ok(alert) => {
                if let Err(e) = fire_alert(&config, &alert, &mut std::io::stdout()) {
                    error!("Failed to render {} alert: {}", alert.name(), e);
                }
            }
            Err(RecvError::Lagged(missed)) => {
                warn!("Alert renderer fell behind, {} alerts dropped", missed);
            }
            Err(RecvError::Closed) => {
                info!("Alert channel closed, stopping alert renderer");
                break;
            }
        }
    }
}
