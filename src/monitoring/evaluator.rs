//! Threshold evaluation
//!
//! Pure functions turning the current health of a target (or the system-wide
//! availability figure) into breach events. No state is kept here.

use super::health::TargetHealth;
use super::types::AlertSeverity;
use crate::config::{AvailabilityThresholds, ResponseTimeThresholds, TargetConfig};
use serde::Serialize;

/// A detected threshold violation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Breach {
    /// Response time above the warning or critical threshold
    Latency {
        target: String,
        level: AlertSeverity,
        response_time_ms: u64,
        threshold_ms: u64,
    },
    /// A critical target is failing its probes
    Availability {
        target: String,
        consecutive_failures: u32,
        error: Option<String>,
    },
    /// Share of healthy targets below the configured percentage
    SystemAvailability {
        level: AlertSeverity,
        availability: f64,
        threshold: f64,
    },
}

impl Breach {
    pub fn severity(&self) -> AlertSeverity {
        match self {
            Breach::Latency { level, .. } | Breach::SystemAvailability { level, .. } => *level,
            Breach::Availability { .. } => AlertSeverity::Critical,
        }
    }

    /// The target the breach concerns, `None` for system-level breaches
    pub fn target(&self) -> Option<&str> {
        match self {
            Breach::Latency { target, .. } | Breach::Availability { target, .. } => {
                Some(target.as_str())
            }
            Breach::SystemAvailability { .. } => None,
        }
    }
}

/// Evaluate one target's current health against its thresholds
///
/// Only the highest exceeded latency level is reported.
pub fn evaluate(
    target: &TargetConfig,
    thresholds: &ResponseTimeThresholds,
    health: &TargetHealth,
) -> Vec<Breach> {
    let mut breaches = Vec::new();

    if let Some(response_time_ms) = health.result.response_time_ms {
        let level = if response_time_ms > thresholds.critical {
            Some((AlertSeverity::Critical, thresholds.critical))
        } else if response_time_ms > thresholds.warning {
            Some((AlertSeverity::Warning, thresholds.warning))
        } else {
            None
        };

        if let Some((level, threshold_ms)) = level {
            breaches.push(Breach::Latency {
                target: target.name.clone(),
                level,
                response_time_ms,
                threshold_ms,
            });
        }
    }

    if !health.is_healthy() && target.critical {
        breaches.push(Breach::Availability {
            target: target.name.clone(),
            consecutive_failures: health.consecutive_failures,
            error: health.last_error.clone(),
        });
    }

    breaches
}

/// Evaluate system-wide availability (percent) against its thresholds
pub fn evaluate_system(availability: f64, thresholds: &AvailabilityThresholds) -> Option<Breach> {
    let (level, threshold) = if availability < thresholds.critical {
        (AlertSeverity::Critical, thresholds.critical)
    } else if availability < thresholds.warning {
        (AlertSeverity::Warning, thresholds.warning)
    } else {
        return None;
    };

    Some(Breach::SystemAvailability {
        level,
        availability,
        threshold,
    })
}
