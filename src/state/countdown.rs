//! Countdown state machine
//!
//! Pure timing logic with no clock and no I/O. A scheduler outside this
//! module calls [`CountdownTimer::tick`] once per period.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, TimerError},
    presets::{Preset, PresetKey},
};

/// Remaining time that triggers an interval alert when it is an exact multiple
pub const INTERVAL_ALERT_SECONDS: u32 = 120;

/// Coarse phase of the timer, distinct from the pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Selecting,
    Running,
}

/// Whether a command changed the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored,
}

/// Alert events produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AlertSignal {
    /// Remaining time reached a positive multiple of two minutes
    Interval { remaining_seconds: u32 },
    /// The countdown reached zero
    Completion,
}

impl AlertSignal {
    pub fn name(&self) -> &'static str {
        match self {
            AlertSignal::Interval { .. } => "interval",
            AlertSignal::Completion => "completion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    selected_preset: Option<PresetKey>,
    total_seconds: u32,
    remaining_seconds: u32,
    is_running: bool,
    phase: Phase,
}

impl CountdownTimer {
    /// Create a timer in the selecting phase with nothing picked
    pub fn new() -> Self {
        Self {
            selected_preset: None,
            total_seconds: 0,
            remaining_seconds: 0,
            is_running: false,
            phase: Phase::Selecting,
        }
    }

    /// Select a preset by its textual key
    pub fn select_preset(&mut self, key: &str) -> Result<CommandOutcome> {
        let key = key.parse::<PresetKey>()?;
        Ok(self.select(key))
    }

    /// Select a preset. Only applies while selecting.
    pub fn select(&mut self, key: PresetKey) -> CommandOutcome {
        if self.phase != Phase::Selecting {
            debug!("Ignoring preset selection while running");
            return CommandOutcome::Ignored;
        }
        self.selected_preset = Some(key);
        CommandOutcome::Applied
    }

    pub fn start(&mut self) -> Result<CommandOutcome> {
        if self.phase != Phase::Selecting {
            debug!("Ignoring start, countdown already begun");
            return Ok(CommandOutcome::Ignored);
        }
        let preset = self.selected_preset.ok_or(TimerError::NoPresetSelected)?.preset();

        self.total_seconds = preset.duration_seconds;
        self.remaining_seconds = preset.duration_seconds;
        self.is_running = true;
        self.phase = Phase::Running;
        Ok(CommandOutcome::Applied)
    }

    /// Advance the countdown by one second.
    ///
    /// No-op unless running with time left. Stops the timer on reaching zero.
    pub fn tick(&mut self) -> Option<AlertSignal> {
        if !self.is_running || self.remaining_seconds == 0 {
            return None;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.is_running = false;
            return Some(AlertSignal::Completion);
        }
        if self.remaining_seconds % INTERVAL_ALERT_SECONDS == 0 {
            return Some(AlertSignal::Interval {
                remaining_seconds: self.remaining_seconds,
            });
        }
        None
    }

    /// Toggle the pause flag. A finished timer cannot be resumed.
    pub fn pause_or_resume(&mut self) -> CommandOutcome {
        if self.phase != Phase::Running || self.remaining_seconds == 0 {
            return CommandOutcome::Ignored;
        }
        self.is_running = !self.is_running;
        CommandOutcome::Applied
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_preset(&self) -> Option<&'static Preset> {
        self.selected_preset.map(|k| k.preset())
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Ran to zero and is waiting for a reset
    pub fn is_expired(&self) -> bool {
        self.phase == Phase::Running && self.remaining_seconds == 0
    }

    pub fn progress_fraction(&self) -> f64 {
        progress_fraction(self.total_seconds, self.remaining_seconds)
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Elapsed share of the run, 0 when there is no run
pub fn progress_fraction(total_seconds: u32, remaining_seconds: u32) -> f64 {
    if total_seconds == 0 {
        return 0.0;
    }
    let elapsed = total_seconds.saturating_sub(remaining_seconds);
    f64::from(elapsed) / f64::from(total_seconds)
}

/// Format seconds as "MM:SS"
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
