//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

use super::{AlertSignal, CommandOutcome, CountdownTimer, RunState, TimerSnapshot};
use crate::{
    error::{Result, TimerError},
    presets::PresetKey,
};

/// Owns the countdown and fans its changes out to the ticker, the alert
/// renderer and the HTTP layer
#[derive(Debug)]
pub struct AppState {
    /// The countdown itself, the single mutable owner
    pub timer: Arc<Mutex<CountdownTimer>>,
    /// Period between ticks
    pub tick_interval: Duration,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Interval and completion alerts
    pub alert_tx: broadcast::Sender<AlertSignal>,
    /// Snapshot after every change
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
    /// Running flag and generation, drives the ticker
    pub run_state_tx: watch::Sender<RunState>,
    pub _run_state_rx: watch::Receiver<RunState>,
}

impl AppState {
    /// Create a new AppState with a fresh timer
    pub fn new(port: u16, host: String, tick_interval: Duration) -> Self {
        let (alert_tx, _) = broadcast::channel(16);
        let (timer_update_tx, timer_update_rx) = watch::channel(TimerSnapshot::default());
        let (run_state_tx, run_state_rx) = watch::channel(RunState::default());

        Self {
            timer: Arc::new(Mutex::new(CountdownTimer::new())),
            tick_interval,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            alert_tx,
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
            run_state_tx,
            _run_state_rx: run_state_rx,
        }
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, CountdownTimer>> {
        self.timer
            .lock()
            .map_err(|e| TimerError::StatePoisoned(format!("Failed to lock timer: {}", e)))
    }

    /// Apply a command under the timer lock and notify listeners if it changed anything
    fn apply<F>(&self, action: &str, command: F) -> Result<(CommandOutcome, TimerSnapshot)>
    where
        F: FnOnce(&mut CountdownTimer) -> Result<CommandOutcome>,
    {
        let mut timer = self.lock_timer()?;
        let before = (timer.is_running(), timer.phase());

        let outcome = command(&mut *timer)?;
        let snapshot = TimerSnapshot::of(&timer);

        if outcome == CommandOutcome::Applied {
            if (timer.is_running(), timer.phase()) != before {
                self.advance_run_state(timer.is_running());
            }
            self.publish_snapshot(snapshot.clone());
        }
        drop(timer); // Release the lock early

        match outcome {
            CommandOutcome::Applied => {
                info!("{} applied: {} remaining", action, snapshot.display);
                self.record_action(action);
            }
            CommandOutcome::Ignored => debug!("{} ignored in phase {:?}", action, snapshot.phase),
        }

        Ok((outcome, snapshot))
    }

    /// Select a preset by its textual key
    pub fn select_preset(&self, key: &str) -> Result<(CommandOutcome, TimerSnapshot)> {
        let key = key.parse::<PresetKey>()?;
        self.apply("select", |timer| Ok(timer.select(key)))
    }

    pub fn start(&self) -> Result<(CommandOutcome, TimerSnapshot)> {
        self.apply("start", |timer| timer.start())
    }

    pub fn pause_or_resume(&self) -> Result<(CommandOutcome, TimerSnapshot)> {
        self.apply("toggle", |timer| Ok(timer.pause_or_resume()))
    }

    pub fn reset(&self) -> Result<(CommandOutcome, TimerSnapshot)> {
        self.apply("reset", |timer| {
            timer.reset();
            Ok(CommandOutcome::Applied)
        })
    }

    /// Advance the countdown by one second on behalf of the ticker.
    ///
    /// Ticks armed for an older run state generation are discarded.
    pub fn tick(&self, generation: u64) -> Result<Option<AlertSignal>> {
        let mut timer = self.lock_timer()?;

        let current = self.run_state_tx.borrow().generation;
        if current != generation {
            debug!("Discarding stale tick (generation {} != {})", generation, current);
            return Ok(None);
        }

        let was_running = timer.is_running();
        let alert = timer.tick();
        if !was_running {
            return Ok(None);
        }

        let snapshot = TimerSnapshot::of(&timer);
        debug!("Tick: {} remaining", snapshot.display);
        if timer.is_running() != was_running {
            self.advance_run_state(timer.is_running());
        }
        self.publish_snapshot(snapshot);
        drop(timer);

        if let Some(alert) = alert {
            self.publish_alert(alert);
        }
        Ok(alert)
    }

    /// Must be called with the timer lock held
    fn advance_run_state(&self, running: bool) {
        self.run_state_tx.send_modify(|run| {
            run.running = running;
            run.generation += 1;
        });
        debug!("Run state changed: running={}", running);
    }

    fn publish_snapshot(&self, snapshot: TimerSnapshot) {
        // The kept receiver means this cannot fail
        let _ = self.timer_update_tx.send(snapshot);
    }

    fn publish_alert(&self, alert: AlertSignal) {
        if self.alert_tx.send(alert).is_err() {
            debug!("No listeners for {} alert", alert.name());
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Get current timer snapshot
    pub fn get_timer_state(&self) -> Result<TimerSnapshot> {
        self.lock_timer().map(|timer| TimerSnapshot::of(&timer))
    }

    pub fn run_state(&self) -> RunState {
        *self.run_state_tx.borrow()
    }

    pub fn subscribe_alerts(&self) -> broadcast::Receiver<AlertSignal> {
        self.alert_tx.subscribe()
    }

    pub fn subscribe_run_state(&self) -> watch::Receiver<RunState> {
        self.run_state_tx.subscribe()
    }

    pub fn subscribe_snapshots(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    fn state() -> AppState {
        AppState::new(0, "127.0.0.1".to_string(), Duration::from_secs(1))
    }

    #[test]
    fn test_start_bumps_generation() {
        let state = state();
        assert_eq!(state.run_state(), RunState::default());

        state.select_preset("soft").unwrap();
        assert_eq!(state.run_state().generation, 0);

        let (outcome, snapshot) = state.start().unwrap();
        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(snapshot.remaining_seconds, 360);
        assert_eq!(state.run_state(), RunState { running: true, generation: 1 });
    }

    #[test]
    fn test_stale_tick_is_discarded() {
        let state = state();
        state.select_preset("medium").unwrap();
        state.start().unwrap();
        let armed = state.run_state().generation;

        state.pause_or_resume().unwrap();
        state.pause_or_resume().unwrap();
        assert_eq!(state.tick(armed), Ok(None));
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 480);

        state.tick(state.run_state().generation).unwrap();
        assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 479);
    }

    #[test]
    fn test_failed_command_changes_nothing() {
        let state = state();
        assert_eq!(state.start(), Err(TimerError::NoPresetSelected));
        assert!(matches!(state.select_preset("poached"), Err(TimerError::InvalidPreset(_))));
        assert_eq!(state.get_last_action(), (None, None));
        assert_eq!(state.run_state().generation, 0);
    }

    #[test]
    fn test_completion_publishes_alert_and_stops() {
        let state = state();
        let mut alerts = state.subscribe_alerts();
        state.select_preset("soft").unwrap();
        state.start().unwrap();

        for _ in 0..360 {
            state.tick(state.run_state().generation).unwrap();
        }
        let snapshot = state.get_timer_state().unwrap();
        assert_eq!(snapshot.remaining_seconds, 0);
        assert!(!snapshot.is_running);
        assert_eq!(snapshot.phase, Phase::Running);
        assert!(!state.run_state().running);
        assert_eq!(*state.subscribe_snapshots().borrow(), snapshot);

        let mut received = Vec::new();
        while let Ok(alert) = alerts.try_recv() {
            received.push(alert);
        }
        assert_eq!(
            received,
            vec![
                AlertSignal::Interval { remaining_seconds: 240 },
                AlertSignal::Interval { remaining_seconds: 120 },
                AlertSignal::Completion,
            ]
        );
    }

    #[test]
    fn test_reset_records_action() {
        let state = state();
        state.select_preset("hard").unwrap();
        state.start().unwrap();
        let (outcome, snapshot) = state.reset().unwrap();
        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(snapshot, TimerSnapshot::default());
        assert!(!state.run_state().running);

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("reset"));
        assert!(time.is_some());
    }
}
