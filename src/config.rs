//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;

use crate::alerts::AlertConfig;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "egg-timer")]
#[command(about = "An egg boil countdown timer with a local HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Countdown tick period in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Do not ring the terminal bell on alerts
    #[arg(long)]
    pub no_bell: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn alert_config(&self) -> AlertConfig {
        AlertConfig { bell: !self.no_bell }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["egg-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.log_level(), "info");
        assert!(config.alert_config().bell);
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["egg-timer", "-p", "8080", "--tick-ms", "50", "--no-bell", "-v"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert!(!config.alert_config().bell);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_zero_tick_rejected() {
        assert!(Config::try_parse_from(["egg-timer", "--tick-ms", "0"]).is_err());
    }
}
