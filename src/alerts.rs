//! Alert rendering for interval and completion signals

use std::io::{self, Write};
use tracing::info;

use crate::state::AlertSignal;

/// Terminal bell character
const BELL: &[u8] = b"\x07";

#[derive(Debug, Clone)]
pub struct AlertConfig {
    /// Ring the terminal bell
    pub bell: bool,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { bell: true }
    }
}

/// Number of bells for a signal. Completion is the more emphatic one.
pub fn bell_count(alert: &AlertSignal) -> usize {
    match alert {
        AlertSignal::Interval { .. } => 1,
        AlertSignal::Completion => 3,
    }
}

pub fn fire_alert<W: Write>(config: &AlertConfig, alert: &AlertSignal, out: &mut W) -> io::Result<()> {
    match alert {
        AlertSignal::Interval { remaining_seconds } => {
            info!("Interval alert: {}s remaining", remaining_seconds);
        }
        AlertSignal::Completion => info!("Countdown complete, eggs are done"),
    }

    if config.bell {
        for _ in 0..bell_count(alert) {
            out.write_all(BELL)?;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rings_three_times() {
        let mut out = Vec::new();
        fire_alert(&AlertConfig::default(), &AlertSignal::Completion, &mut out).unwrap();
        assert_eq!(out, b"\x07\x07\x07");
    }

    #[test]
    fn test_interval_rings_once() {
        let mut out = Vec::new();
        let alert = AlertSignal::Interval { remaining_seconds: 240 };
        fire_alert(&AlertConfig::default(), &alert, &mut out).unwrap();
        assert_eq!(out, b"\x07");
    }

    #[test]
    fn test_bell_disabled() {
        let mut out = Vec::new();
        fire_alert(&AlertConfig { bell: false }, &AlertSignal::Completion, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
