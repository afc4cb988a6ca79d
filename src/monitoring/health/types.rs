//! Health checking types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Outcome of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Why a probe failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// No response within the target timeout
    #[error("timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection, DNS or TLS failure
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived with a non-2xx status
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),
}

/// Latest observed result for a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    /// Round-trip time, present only for successful probes
    pub response_time_ms: Option<u64>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl HealthCheckResult {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            status: HealthStatus::Healthy,
            response_time_ms: Some(response_time_ms),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn unhealthy(failure: &ProbeFailure) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            response_time_ms: None,
            error: Some(failure.to_string()),
            timestamp: Utc::now(),
        }
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// A probe result tagged with the target it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub target: String,
    pub result: HealthCheckResult,
}

impl ProbeReport {
    pub fn success(target: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            target: target.into(),
            result: HealthCheckResult::healthy(response_time_ms),
        }
    }

    pub fn failure(target: impl Into<String>, failure: &ProbeFailure) -> Self {
        Self {
            target: target.into(),
            result: HealthCheckResult::unhealthy(failure),
        }
    }
}

/// Registry entry for one target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetHealth {
    pub name: String,
    pub result: HealthCheckResult,
    pub consecutive_failures: u32,
    pub last_error: Option<String>,
}

impl TargetHealth {
    /// Build the first entry for a target from its first result
    pub(super) fn first(name: String, result: HealthCheckResult) -> Self {
        let mut entry = Self {
            name,
            consecutive_failures: 0,
            last_error: None,
            result: result.clone(),
        };
        entry.apply(result);
        entry
    }

    /// Overwrite the current result and update the failure streak
    pub(super) fn apply(&mut self, result: HealthCheckResult) {
        if result.is_healthy() {
            self.consecutive_failures = 0;
        } else {
            self.consecutive_failures += 1;
            self.last_error = result.error.clone();
        }
        self.result = result;
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.result.is_healthy()
    }
}

/// Cycle-consistent copy of the registry
#[derive(Debug, Clone, Default, Serialize)]
pub struct HealthSnapshot {
    pub taken_at: DateTime<Utc>,
    pub targets: BTreeMap<String, TargetHealth>,
}

impl HealthSnapshot {
    pub fn get(&self, name: &str) -> Option<&TargetHealth> {
        self.targets.get(name)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn healthy_count(&self) -> usize {
        self.targets.values().filter(|t| t.is_healthy()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetHealth> {
        self.targets.values()
    }
}
