//! Scheduling, incident and alerting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cadences of the periodic tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Interval between probe cycles
    #[serde(default = "default_check_interval_ms")]
    pub check_interval_ms: u64,
    /// Interval between incident review passes
    #[serde(default = "default_incident_review_interval_ms")]
    pub incident_review_interval_ms: u64,
    /// Interval between metrics publications
    #[serde(default = "default_metrics_interval_ms")]
    pub metrics_interval_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            check_interval_ms: default_check_interval_ms(),
            incident_review_interval_ms: default_incident_review_interval_ms(),
            metrics_interval_ms: default_metrics_interval_ms(),
        }
    }
}

impl ScheduleConfig {
    pub fn check_interval(&self) -> Duration {
        Duration::from_millis(self.check_interval_ms)
    }

    pub fn incident_review_interval(&self) -> Duration {
        Duration::from_millis(self.incident_review_interval_ms)
    }

    pub fn metrics_interval(&self) -> Duration {
        Duration::from_millis(self.metrics_interval_ms)
    }
}

/// Incident promotion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentConfig {
    /// Consecutive failures before a critical target opens an incident
    #[serde(default = "default_incident_threshold")]
    pub threshold: u32,
}

impl Default for IncidentConfig {
    fn default() -> Self {
        Self {
            threshold: default_incident_threshold(),
        }
    }
}

/// Alert deduplication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Window during which alerts with the same signature are suppressed
    #[serde(default = "default_alert_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Maximum number of alerts retained in history
    #[serde(default = "default_alert_history_limit")]
    pub history_limit: usize,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: default_alert_cooldown_ms(),
            history_limit: default_alert_history_limit(),
        }
    }
}

impl AlertingConfig {
    /// Cooldown window, saturating at the largest representable delta
    pub fn cooldown(&self) -> chrono::TimeDelta {
        i64::try_from(self.cooldown_ms)
            .ok()
            .and_then(chrono::TimeDelta::try_milliseconds)
            .unwrap_or(chrono::TimeDelta::MAX)
    }
}
