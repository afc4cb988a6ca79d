//! Health registry: latest state per target

use super::types::{HealthSnapshot, ProbeReport, TargetHealth};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Holds the current health of every probed target
///
/// A whole cycle is applied under one write lock, so readers never observe a
/// half-applied cycle.
#[derive(Debug, Clone, Default)]
pub struct HealthRegistry {
    data: Arc<RwLock<BTreeMap<String, TargetHealth>>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one cycle's results and return the resulting snapshot
    pub fn apply_results(&self, reports: Vec<ProbeReport>) -> HealthSnapshot {
        let mut data = self.data.write();

        for report in reports {
            match data.get_mut(&report.target) {
                Some(entry) => entry.apply(report.result),
                None => {
                    let entry = TargetHealth::first(report.target.clone(), report.result);
                    data.insert(report.target, entry);
                }
            }
        }

        debug!("Applied probe results for {} targets", data.len());

        HealthSnapshot {
            taken_at: chrono::Utc::now(),
            targets: data.clone(),
        }
    }

    /// Copy-on-read snapshot of all targets
    pub fn snapshot(&self) -> HealthSnapshot {
        let data = self.data.read();
        HealthSnapshot {
            taken_at: chrono::Utc::now(),
            targets: data.clone(),
        }
    }

    /// Get a single target's health
    pub fn get(&self, name: &str) -> Option<TargetHealth> {
        self.data.read().get(name).cloned()
    }
}
