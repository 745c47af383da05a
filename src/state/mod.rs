//! State management module
//!
//! The countdown state machine, its snapshot, and the shared owner that
//! serializes commands and ticks.

pub mod countdown;
pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use countdown::{AlertSignal, CommandOutcome, CountdownTimer, Phase};
pub use app_state::AppState;
pub use timer_state::{RunState, TimerSnapshot};
pub use crate::error::TimerError;
