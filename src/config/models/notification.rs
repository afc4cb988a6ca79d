//! Notification channel configuration

use super::*;
use crate::monitoring::AlertSeverity;
use serde::{Deserialize, Serialize};

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Emit every alert through the tracing log
    #[serde(default = "default_true")]
    pub log: bool,
    /// Slack incoming webhook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<SlackConfig>,
    /// Generic JSON webhooks (chat bridges, pagers)
    #[serde(default)]
    pub webhooks: Vec<WebhookChannelConfig>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            log: true,
            slack: None,
            webhooks: Vec::new(),
        }
    }
}

/// Slack channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    pub webhook_url: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default = "default_min_severity")]
    pub min_severity: AlertSeverity,
}

/// Generic webhook channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookChannelConfig {
    pub name: String,
    pub url: String,
    #[serde(default = "default_min_severity")]
    pub min_severity: AlertSeverity,
}

fn default_min_severity() -> AlertSeverity {
    AlertSeverity::Warning
}
