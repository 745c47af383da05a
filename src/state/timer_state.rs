//! Read-only timer snapshot for the presentation layer

use serde::{Deserialize, Serialize};

use super::countdown::{format_mm_ss, CountdownTimer, Phase};
use crate::presets::{PresetKey, PLACEHOLDER_IMAGE};

/// Timer snapshot published after every state change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub selected_preset: Option<PresetKey>,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
    pub is_running: bool,
    pub progress_fraction: f64,
    /// Remaining time as "MM:SS"
    pub display: String,
    pub image_ref: String,
    /// Title for the running view, absent while selecting
    pub title: Option<String>,
}

impl TimerSnapshot {
    /// Capture the current state of a timer
    pub fn of(timer: &CountdownTimer) -> Self {
        let preset = timer.selected_preset();
        let title = match (timer.phase(), preset) {
            (Phase::Running, Some(p)) => Some(format!("Timer untuk Telur {}", p.short_label())),
            _ => None,
        };

        Self {
            phase: timer.phase(),
            selected_preset: preset.map(|p| p.key),
            remaining_seconds: timer.remaining_seconds(),
            total_seconds: timer.total_seconds(),
            is_running: timer.is_running(),
            progress_fraction: timer.progress_fraction(),
            display: format_mm_ss(timer.remaining_seconds()),
            image_ref: preset.map_or(PLACEHOLDER_IMAGE, |p| p.image_ref).to_string(),
            title,
        }
    }

    /// Progress as a 0-100 percentage for progress bars
    pub fn progress_percent(&self) -> f64 {
        self.progress_fraction * 100.0
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::of(&CountdownTimer::new())
    }
}

/// Run state seen by the ticker. The generation changes on every transition
/// so ticks armed for an older run state can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunState {
    pub running: bool,
    pub generation: u64,
}
