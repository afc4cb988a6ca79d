//! Alert manager implementation

use super::notifier::Notifier;
use super::types::{AlertOutcome, AlertStats, AlertStorage, AlertTrigger};
use crate::config::AlertingConfig;
use crate::monitoring::types::Alert;
use crate::utils::error::{MonitorError, Result};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Deduplicates triggers by signature and keeps the alert history
#[derive(Debug, Clone)]
pub struct AlertManager {
    /// Configuration
    config: AlertingConfig,
    /// Consolidated storage for all alert-related data
    pub(super) storage: Arc<RwLock<AlertStorage>>,
    /// Channel fan-out
    notifier: Arc<Notifier>,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: AlertingConfig, notifier: Notifier) -> Self {
        Self {
            config,
            storage: Arc::new(RwLock::new(AlertStorage::default())),
            notifier: Arc::new(notifier),
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Raise a trigger now
    pub fn raise(&self, trigger: AlertTrigger) -> AlertOutcome {
        self.raise_at(trigger, Utc::now())
    }

    /// Raise a trigger as of `now`
    ///
    /// An unexpired cooldown for the signature suppresses the trigger with no
    /// side effects. Otherwise the alert is stored, a fresh cooldown installed
    /// and the alert handed to the notifier.
    pub fn raise_at(&self, trigger: AlertTrigger, now: DateTime<Utc>) -> AlertOutcome {
        let alert = {
            let mut storage = self.storage.write();

            if let Some(until) = storage.cooldowns.get(&trigger.signature).copied() {
                if until > now {
                    storage.stats.suppressed_alerts += 1;
                    debug!(signature = %trigger.signature, %until, "Alert suppressed by cooldown");
                    return AlertOutcome::Suppressed {
                        signature: trigger.signature,
                        until,
                    };
                }
            }

            let alert = Alert {
                id: Uuid::new_v4().to_string(),
                severity: trigger.severity,
                title: trigger.title,
                message: trigger.message,
                signature: trigger.signature.to_string(),
                context: trigger.context,
                created_at: now,
                acknowledged: false,
                resolved: false,
            };

            let until = now
                .checked_add_signed(self.config.cooldown())
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            storage.cooldowns.insert(trigger.signature.clone(), until);

            storage.stats.total_alerts += 1;
            *storage
                .stats
                .alerts_by_severity
                .entry(alert.severity.to_string())
                .or_insert(0) += 1;
            *storage
                .stats
                .alerts_by_category
                .entry(trigger.signature.category.to_string())
                .or_insert(0) += 1;
            storage.stats.last_alert = Some(now);

            storage.history.push_back(alert.clone());
            while storage.history.len() > self.config.history_limit {
                storage.history.pop_front();
            }

            alert
        };

        info!(
            alert_id = %alert.id,
            signature = %alert.signature,
            "Alert raised: {} - {}",
            alert.severity,
            alert.title
        );

        self.notifier.dispatch(&alert);
        AlertOutcome::Created(alert)
    }

    /// Mark an alert as acknowledged
    pub fn acknowledge(&self, id: &str) -> Result<Alert> {
        self.update(id, |alert| alert.acknowledged = true)
    }

    /// Mark an alert as resolved
    pub fn resolve(&self, id: &str) -> Result<Alert> {
        self.update(id, |alert| alert.resolved = true)
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut Alert)) -> Result<Alert> {
        let mut storage = self.storage.write();
        let alert = storage
            .history
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or_else(|| MonitorError::not_found(format!("Alert {} not found", id)))?;

        apply(alert);
        Ok(alert.clone())
    }

    /// All retained alerts, oldest first
    pub fn alerts(&self) -> Vec<Alert> {
        self.storage.read().history.iter().cloned().collect()
    }

    /// Alerts not yet resolved
    pub fn active_alerts(&self) -> Vec<Alert> {
        self.storage
            .read()
            .history
            .iter()
            .filter(|alert| !alert.resolved)
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.storage
            .read()
            .history
            .iter()
            .filter(|alert| !alert.resolved)
            .count()
    }

    pub fn get(&self, id: &str) -> Option<Alert> {
        self.storage
            .read()
            .history
            .iter()
            .find(|alert| alert.id == id)
            .cloned()
    }

    pub fn stats(&self) -> AlertStats {
        self.storage.read().stats.clone()
    }

    /// Number of signatures currently tracked for cooldown
    pub fn cooldown_count(&self) -> usize {
        self.storage.read().cooldowns.len()
    }

    /// Drop expired cooldown entries
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Utc::now())
    }

    pub fn sweep_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut storage = self.storage.write();
        let before = storage.cooldowns.len();
        storage.cooldowns.retain(|_, until| *until > now);
        let removed = before - storage.cooldowns.len();

        if removed > 0 {
            debug!("Swept {} expired alert cooldowns", removed);
        }
        removed
    }
}
