//! Incident types

use crate::monitoring::types::AlertSeverity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Incident lifecycle state; `Resolved` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Open,
    Resolved,
}

/// One timestamped event in an incident's history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// A tracked episode of sustained failure for one target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub severity: AlertSeverity,
    pub status: IncidentStatus,
    /// Name of the affected target
    pub service: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub timeline: Vec<TimelineEntry>,
}

impl Incident {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status == IncidentStatus::Open
    }

    pub(super) fn record(&mut self, timestamp: DateTime<Utc>, message: impl Into<String>) {
        self.timeline.push(TimelineEntry {
            timestamp,
            message: message.into(),
        });
    }

    /// Move to `Resolved`; a no-op for an already resolved incident
    pub(super) fn resolve(&mut self, at: DateTime<Utc>, message: impl Into<String>) -> bool {
        if !self.is_open() {
            return false;
        }
        self.status = IncidentStatus::Resolved;
        self.end_time = Some(at.max(self.start_time));
        self.record(at, message);
        true
    }
}
