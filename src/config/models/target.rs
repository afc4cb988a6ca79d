//! Target and threshold configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A monitored endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetConfig {
    /// Unique target name
    pub name: String,
    /// URL probed with an HTTP GET
    pub url: String,
    /// Per-probe timeout
    #[serde(default = "default_probe_timeout_ms")]
    pub timeout_ms: u64,
    /// Whether sustained failures of this target open incidents
    #[serde(default)]
    pub critical: bool,
    /// Per-target override of the global response-time thresholds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<ResponseTimeThresholds>,
}

impl TargetConfig {
    /// Create a target with default timeout and no overrides
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            timeout_ms: default_probe_timeout_ms(),
            critical: false,
            response_time: None,
        }
    }

    /// Mark the target as critical
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    /// Override the probe timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Global thresholds
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThresholdsConfig {
    /// Response-time thresholds in milliseconds
    #[serde(default)]
    pub response_time: ResponseTimeThresholds,
    /// System availability thresholds in percent
    #[serde(default)]
    pub availability: AvailabilityThresholds,
}

/// Response-time thresholds in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseTimeThresholds {
    #[serde(default = "default_response_time_warning_ms")]
    pub warning: u64,
    #[serde(default = "default_response_time_critical_ms")]
    pub critical: u64,
}

impl Default for ResponseTimeThresholds {
    fn default() -> Self {
        Self {
            warning: default_response_time_warning_ms(),
            critical: default_response_time_critical_ms(),
        }
    }
}

/// Availability thresholds in percent; breached when availability drops below
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityThresholds {
    #[serde(default = "default_availability_warning")]
    pub warning: f64,
    #[serde(default = "default_availability_critical")]
    pub critical: f64,
}

impl Default for AvailabilityThresholds {
    fn default() -> Self {
        Self {
            warning: default_availability_warning(),
            critical: default_availability_critical(),
        }
    }
}
