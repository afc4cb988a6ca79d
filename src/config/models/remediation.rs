//! Remediation configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remediation dispatcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationConfig {
    /// Enable automatic remediation
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Upper bound for a single action
    #[serde(default = "default_action_timeout_ms")]
    pub action_timeout_ms: u64,
    /// Actions attempted in order for each unhealthy critical target
    #[serde(default)]
    pub actions: Vec<RemediationActionConfig>,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            action_timeout_ms: default_action_timeout_ms(),
            actions: Vec::new(),
        }
    }
}

impl RemediationConfig {
    pub fn action_timeout(&self) -> Duration {
        Duration::from_millis(self.action_timeout_ms)
    }
}

/// A single configured remediation action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemediationActionConfig {
    /// Action name, e.g. `clear_cache`, `restart`, `scale_up`
    pub name: String,
    /// How the action is carried out
    #[serde(rename = "type", default)]
    pub kind: RemediationActionKind,
    /// Hook URL for `webhook` actions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Remediation action implementations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RemediationActionKind {
    /// Record the intended action only
    #[default]
    Log,
    /// POST the action request to an operator hook
    Webhook,
}
