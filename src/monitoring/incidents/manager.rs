//! Incident manager implementation

use super::types::{Incident, IncidentStatus};
use crate::config::TargetConfig;
use crate::monitoring::health::{HealthSnapshot, TargetHealth};
use crate::monitoring::types::AlertSeverity;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Default)]
struct IncidentStorage {
    /// All incidents in creation order
    incidents: Vec<Incident>,
    /// Target name to index of its open incident
    open_by_target: HashMap<String, usize>,
}

/// Promotes sustained critical failures to incidents and resolves them
#[derive(Debug, Clone)]
pub struct IncidentManager {
    threshold: u32,
    storage: Arc<RwLock<IncidentStorage>>,
}

impl IncidentManager {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            storage: Arc::new(RwLock::new(IncidentStorage::default())),
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Observe a target's health after a probe cycle
    ///
    /// Returns the incident when this observation opened one.
    pub fn observe(&self, target: &TargetConfig, health: &TargetHealth) -> Option<Incident> {
        self.observe_at(target, health, Utc::now())
    }

    pub fn observe_at(
        &self,
        target: &TargetConfig,
        health: &TargetHealth,
        now: DateTime<Utc>,
    ) -> Option<Incident> {
        if !target.critical || health.consecutive_failures < self.threshold {
            return None;
        }

        let mut storage = self.storage.write();
        if storage.open_by_target.contains_key(&target.name) {
            return None;
        }

        let mut incident = Incident {
            id: Uuid::new_v4().to_string(),
            title: format!("{} is down", target.name),
            severity: AlertSeverity::Critical,
            status: IncidentStatus::Open,
            service: target.name.clone(),
            start_time: now,
            end_time: None,
            timeline: Vec::new(),
        };
        incident.record(
            now,
            format!(
                "Opened after {} consecutive failures: {}",
                health.consecutive_failures,
                health.last_error.as_deref().unwrap_or("unknown error")
            ),
        );

        info!(incident_id = %incident.id, service = %incident.service, "Incident opened");

        let index = storage.incidents.len();
        storage.open_by_target.insert(target.name.clone(), index);
        storage.incidents.push(incident.clone());
        Some(incident)
    }

    /// Resolve every open incident whose target has recovered
    pub fn review(&self, snapshot: &HealthSnapshot) -> Vec<Incident> {
        self.review_at(snapshot, Utc::now())
    }

    pub fn review_at(&self, snapshot: &HealthSnapshot, now: DateTime<Utc>) -> Vec<Incident> {
        let mut storage = self.storage.write();

        let recovered: Vec<String> = storage
            .open_by_target
            .keys()
            .filter(|name| {
                snapshot
                    .get(name)
                    .is_some_and(|h| h.is_healthy() && h.consecutive_failures == 0)
            })
            .cloned()
            .collect();

        let mut resolved = Vec::with_capacity(recovered.len());
        for name in recovered {
            let Some(index) = storage.open_by_target.remove(&name) else {
                continue;
            };
            let incident = &mut storage.incidents[index];
            if incident.resolve(now, format!("Resolved: {} is healthy again", name)) {
                info!(incident_id = %incident.id, service = %incident.service, "Incident resolved");
                resolved.push(incident.clone());
            }
        }
        resolved
    }

    pub fn incidents(&self) -> Vec<Incident> {
        self.storage.read().incidents.clone()
    }

    pub fn open_incidents(&self) -> Vec<Incident> {
        self.storage
            .read()
            .incidents
            .iter()
            .filter(|i| i.is_open())
            .cloned()
            .collect()
    }

    pub fn open_count(&self) -> usize {
        self.storage.read().open_by_target.len()
    }

    pub fn get(&self, id: &str) -> Option<Incident> {
        self.storage
            .read()
            .incidents
            .iter()
            .find(|i| i.id == id)
            .cloned()
    }

    /// The open incident for a target, if any
    pub fn open_for(&self, target: &str) -> Option<Incident> {
        let storage = self.storage.read();
        storage
            .open_by_target
            .get(target)
            .and_then(|&index| storage.incidents.get(index))
            .cloned()
    }
}
