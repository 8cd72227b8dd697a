//! # Runtime Configuration
//!
//! Runtime parameters with sane defaults and environment overrides.

use thiserror::Error;
use w3s_aggregator::domain::AggregatorConfig;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Interval between wall-clock refresh ticks, in milliseconds.
    ///
    /// Coarse on purpose: the tick only exists so transactions age out of
    /// the 24-hour window without a registry mutation; sub-second
    /// precision buys nothing.
    pub refresh_interval_ms: u64,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Aggregator tuning.
    pub aggregator: AggregatorConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 15_000,
            log_filter: "info".to_owned(),
            aggregator: AggregatorConfig::default(),
        }
    }
}

impl RuntimeConfig {
    /// Loads the default config with `W3S_*` environment overrides.
    ///
    /// - `W3S_REFRESH_INTERVAL_MS` - refresh tick interval
    /// - `W3S_LOG` - default log filter
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(interval) = std::env::var("W3S_REFRESH_INTERVAL_MS")
            .ok()
            .and_then(|raw| raw.parse().ok())
        {
            config.refresh_interval_ms = interval;
        }
        if let Ok(filter) = std::env::var("W3S_LOG") {
            config.log_filter = filter;
        }
        config
    }

    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the refresh interval is zero (the timer would spin)
    /// - the recency window is zero (nothing could ever display)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.aggregator.recency_window_ms == 0 {
            return Err(ConfigError::ZeroRecencyWindow);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Refresh interval must be positive.
    #[error("Refresh interval must be positive")]
    ZeroRefreshInterval,

    /// Recency window must be positive.
    #[error("Recency window must be positive")]
    ZeroRecencyWindow,
}
