//! Metrics and logging configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Metrics publication configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    /// Response-time smoothing policy
    #[serde(default)]
    pub smoothing: SmoothingConfig,
}

/// Response-time smoothing policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    #[serde(default)]
    pub policy: SmoothingPolicy,
    /// EWMA weight of the newest cycle, in (0, 1]
    #[serde(default = "default_smoothing_alpha")]
    pub alpha: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            policy: SmoothingPolicy::None,
            alpha: default_smoothing_alpha(),
        }
    }
}

/// How the average response time is smoothed across cycles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingPolicy {
    /// Cycle-local figures only
    #[default]
    None,
    /// Additionally publish an exponentially weighted moving average
    Ewma,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
