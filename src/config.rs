use std::env;
use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::providers::DEFAULT_PRICES_URL;

/// Default polling tick
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1100;

/// Runtime configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub prices_url: String,
    pub balances_file: PathBuf,
    pub tick_interval_ms: u64,
    pub log_level: LevelFilter,
}

impl Config {
    fn defaults() -> Self {
        Self {
            prices_url: DEFAULT_PRICES_URL.to_string(),
            balances_file: PathBuf::from("balances.json"),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            log_level: LevelFilter::INFO,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Environment Variables:
    /// - `PRICES_URL`: prices document endpoint
    /// - `BALANCES_FILE`: JSON file with the wallet balances
    /// - `TICK_INTERVAL_MS`: polling interval
    /// - `LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error`
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::defaults();

        Self {
            prices_url: env::var("PRICES_URL").unwrap_or(defaults.prices_url),
            balances_file: env::var("BALANCES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.balances_file),
            tick_interval_ms: env::var("TICK_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.tick_interval_ms),
            log_level: env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}
