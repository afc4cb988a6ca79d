//! Top-level monitor configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main monitor configuration
///
/// Every section carries serde defaults, so an empty document is a valid
/// (if target-less) configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonitorConfig {
    /// Cycle cadences
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Incident promotion settings
    #[serde(default)]
    pub incidents: IncidentConfig,
    /// Alert deduplication settings
    #[serde(default)]
    pub alerts: AlertingConfig,
    /// Global latency/availability thresholds
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    /// Monitored targets
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    /// Remediation actions
    #[serde(default)]
    pub remediation: RemediationConfig,
    /// Notification channels
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Metrics publication settings
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Status API server
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MonitorConfig {
    /// Look up a target by name
    pub fn target(&self, name: &str) -> Option<&TargetConfig> {
        self.targets.iter().find(|t| t.name == name)
    }

    /// Response-time thresholds effective for a target
    pub fn response_time_for(&self, target: &TargetConfig) -> ResponseTimeThresholds {
        target
            .response_time
            .clone()
            .unwrap_or_else(|| self.thresholds.response_time.clone())
    }
}
