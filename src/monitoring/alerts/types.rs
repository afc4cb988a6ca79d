//! Alert types and data structures

use crate::monitoring::evaluator::Breach;
use crate::monitoring::incidents::Incident;
use crate::monitoring::types::{Alert, AlertContext, AlertSeverity};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::fmt;

/// What kind of condition an alert reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    LatencyWarning,
    LatencyCritical,
    Availability,
    SystemAvailabilityWarning,
    SystemAvailabilityCritical,
    IncidentOpened,
    IncidentResolved,
}

impl fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlertCategory::LatencyWarning => "latency_warning",
            AlertCategory::LatencyCritical => "latency_critical",
            AlertCategory::Availability => "availability",
            AlertCategory::SystemAvailabilityWarning => "system_availability_warning",
            AlertCategory::SystemAvailabilityCritical => "system_availability_critical",
            AlertCategory::IncidentOpened => "incident_opened",
            AlertCategory::IncidentResolved => "incident_resolved",
        };
        f.write_str(name)
    }
}

/// Deduplication key for alerts
///
/// The subject is a target name, an incident id or `system`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlertSignature {
    pub subject: String,
    pub category: AlertCategory,
}

impl AlertSignature {
    pub fn new(subject: impl Into<String>, category: AlertCategory) -> Self {
        Self {
            subject: subject.into(),
            category,
        }
    }
}

impl fmt::Display for AlertSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.subject)
    }
}

/// A request to create an alert, subject to cooldown
#[derive(Debug, Clone, PartialEq)]
pub struct AlertTrigger {
    pub signature: AlertSignature,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub context: Option<AlertContext>,
}

impl AlertTrigger {
    pub fn incident_opened(incident: &Incident) -> Self {
        Self {
            signature: AlertSignature::new(incident.id.clone(), AlertCategory::IncidentOpened),
            severity: AlertSeverity::Critical,
            title: format!("Incident opened: {}", incident.service),
            message: incident.title.clone(),
            context: Some(AlertContext::Incident(incident.id.clone())),
        }
    }

    pub fn incident_resolved(incident: &Incident) -> Self {
        Self {
            signature: AlertSignature::new(incident.id.clone(), AlertCategory::IncidentResolved),
            severity: AlertSeverity::Critical,
            title: format!("Incident resolved: {}", incident.service),
            message: format!("{} has recovered", incident.service),
            context: Some(AlertContext::Incident(incident.id.clone())),
        }
    }
}

impl From<Breach> for AlertTrigger {
    fn from(breach: Breach) -> Self {
        let severity = breach.severity();
        match breach {
            Breach::Latency {
                target,
                level,
                response_time_ms,
                threshold_ms,
            } => {
                let category = match level {
                    AlertSeverity::Warning => AlertCategory::LatencyWarning,
                    AlertSeverity::Critical => AlertCategory::LatencyCritical,
                };
                Self {
                    signature: AlertSignature::new(target.clone(), category),
                    severity,
                    title: format!("Slow response from {}", target),
                    message: format!(
                        "{} responded in {}ms, above the {} threshold of {}ms",
                        target,
                        response_time_ms,
                        level.to_string().to_lowercase(),
                        threshold_ms
                    ),
                    context: Some(AlertContext::Target(target)),
                }
            }
            Breach::Availability {
                target,
                consecutive_failures,
                error,
            } => Self {
                signature: AlertSignature::new(target.clone(), AlertCategory::Availability),
                severity,
                title: format!("{} is unavailable", target),
                message: format!(
                    "{} failed {} consecutive checks: {}",
                    target,
                    consecutive_failures,
                    error.as_deref().unwrap_or("unknown error")
                ),
                context: Some(AlertContext::Target(target)),
            },
            Breach::SystemAvailability {
                level,
                availability,
                threshold,
            } => {
                let category = match level {
                    AlertSeverity::Warning => AlertCategory::SystemAvailabilityWarning,
                    AlertSeverity::Critical => AlertCategory::SystemAvailabilityCritical,
                };
                Self {
                    signature: AlertSignature::new("system", category),
                    severity,
                    title: "System availability degraded".to_string(),
                    message: format!(
                        "Availability is {:.1}%, below the {:.1}% threshold",
                        availability, threshold
                    ),
                    context: Some(AlertContext::System),
                }
            }
        }
    }
}

/// Result of raising a trigger
#[derive(Debug, Clone)]
pub enum AlertOutcome {
    /// A new alert was stored and handed to the notifier
    Created(Alert),
    /// An unexpired cooldown exists for the signature
    Suppressed {
        signature: AlertSignature,
        until: DateTime<Utc>,
    },
}

impl AlertOutcome {
    pub fn alert(&self) -> Option<&Alert> {
        match self {
            AlertOutcome::Created(alert) => Some(alert),
            AlertOutcome::Suppressed { .. } => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, AlertOutcome::Suppressed { .. })
    }
}

/// Consolidated alert storage - single lock for related data
#[derive(Debug, Default)]
pub(super) struct AlertStorage {
    /// Alert history, oldest first
    pub history: VecDeque<Alert>,
    /// Cooldown expiry per signature
    pub cooldowns: HashMap<AlertSignature, DateTime<Utc>>,
    /// Alert statistics
    pub stats: AlertStats,
}

/// Alert statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct AlertStats {
    /// Total alerts created
    pub total_alerts: u64,
    /// Triggers dropped by an active cooldown
    pub suppressed_alerts: u64,
    /// Alerts by severity
    pub alerts_by_severity: HashMap<String, u64>,
    /// Alerts by category
    pub alerts_by_category: HashMap<String, u64>,
    /// Last alert timestamp
    pub last_alert: Option<DateTime<Utc>>,
}
