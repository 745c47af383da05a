//! Countdown ticker background task

use std::sync::Arc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that drives the countdown at a fixed period.
///
/// The interval is torn down whenever the run state changes and armed afresh
/// on every resume, so a tick scheduled before a pause or reset never fires.
pub async fn countdown_ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task ({:?} period)", state.tick_interval);

    let mut run_rx = state.subscribe_run_state();

    loop {
        let run = *run_rx.borrow_and_update();

        if !run.running {
            debug!("Ticker idle (generation {})", run.generation);
            if run_rx.changed().await.is_err() {
                break;
            }
            continue;
        }

        debug!("Arming ticker for generation {}", run.generation);
        let period = state.tick_interval;
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick(run.generation) {
                        error!("Failed to advance countdown: {}", e);
                    }
                }

                // Pause, resume, completion or reset: rearm from the new state
                changed = run_rx.changed() => {
                    if changed.is_err() {
                        info!("Run state channel closed, stopping ticker");
                        return;
                    }
                    break;
                }
            }
        }
    }

    info!("Run state channel closed, stopping ticker");
}
