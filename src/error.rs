//! Command boundary errors

/// Precondition failures rejected at the command boundary. A failed command
/// never mutates the timer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Unknown preset '{0}', expected one of: soft, medium, hard")]
    InvalidPreset(String),

    #[error("No preset selected, pick a doneness level first")]
    NoPresetSelected,

    #[error("Timer state is unavailable: {0}")]
    StatePoisoned(String),
}

pub type Result<T> = std::result::Result<T, TimerError>;
