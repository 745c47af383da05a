//! Egg Timer - a countdown timer for boiling eggs
//!
//! This library provides the countdown state machine, its three doneness
//! presets, the fixed-rate ticker that drives it, and a local HTTP surface
//! for presenting and controlling it.

pub mod config;
pub mod error;
pub mod presets;
pub mod state;
pub mod alerts;
pub mod guide;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TimerError;
pub use presets::{Preset, PresetKey};
pub use state::{AlertSignal, AppState, CountdownTimer, Phase, TimerSnapshot};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
