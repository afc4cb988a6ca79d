//! Type definitions for alerts and metric samples

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSeverity::Warning => write!(f, "WARNING"),
            AlertSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// What an alert refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum AlertContext {
    /// A monitored target, by name
    Target(String),
    /// An incident, by id
    Incident(String),
    /// The monitored system as a whole
    System,
}

/// Alert information
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    /// Alert ID
    pub id: String,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Alert title
    pub title: String,
    /// Alert message
    pub message: String,
    /// Deduplication key, `<category>:<subject>`
    pub signature: String,
    /// What the alert refers to
    pub context: Option<AlertContext>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Whether an operator acknowledged the alert
    pub acknowledged: bool,
    /// Whether the alert is resolved
    pub resolved: bool,
}

/// A named numeric sample published for dashboards and reporters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub timestamp: DateTime<Utc>,
}

impl MetricSample {
    pub fn new(name: &str, value: f64, unit: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            timestamp,
        }
    }
}

/// Display state of a configured target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    Healthy,
    Unhealthy,
    /// Not probed yet
    Unknown,
}

/// Per-target entry of the status snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceState,
    pub critical: bool,
    pub response_time_ms: Option<u64>,
    pub last_check: Option<DateTime<Utc>>,
    pub consecutive_failures: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// Point-in-time view of the whole monitor
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// Percentage of probed targets currently healthy
    pub availability: f64,
    pub services: Vec<ServiceStatus>,
    pub active_alerts_count: usize,
    pub open_incidents_count: usize,
    pub timestamp: DateTime<Utc>,
}
