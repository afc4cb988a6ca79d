//! Notification channel implementations

use crate::monitoring::types::{Alert, AlertSeverity};
use crate::utils::error::{MonitorError, Result};
use tracing::{error, warn};

/// Notification channel trait
#[async_trait::async_trait]
pub trait NotificationChannel: Send + Sync + std::fmt::Debug {
    /// Send a notification
    async fn send(&self, alert: &Alert) -> Result<()>;

    /// Get channel name
    fn name(&self) -> &str;

    /// Check if channel supports severity level
    fn supports_severity(&self, severity: AlertSeverity) -> bool;
}

/// Writes alerts to the tracing log
#[derive(Debug)]
pub struct LogChannel {
    min_severity: AlertSeverity,
}

impl LogChannel {
    pub fn new(min_severity: AlertSeverity) -> Self {
        Self { min_severity }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for LogChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        match alert.severity {
            AlertSeverity::Critical => error!(
                alert_id = %alert.id,
                signature = %alert.signature,
                "[{}] {}: {}",
                alert.severity,
                alert.title,
                alert.message
            ),
            AlertSeverity::Warning => warn!(
                alert_id = %alert.id,
                signature = %alert.signature,
                "[{}] {}: {}",
                alert.severity,
                alert.title,
                alert.message
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }

    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity as u8 >= self.min_severity as u8
    }
}

/// Slack notification channel
#[derive(Debug)]
pub struct SlackChannel {
    client: reqwest::Client,
    webhook_url: String,
    channel: Option<String>,
    username: Option<String>,
    min_severity: AlertSeverity,
}

impl SlackChannel {
    /// Create a new Slack notification channel
    pub fn new(
        webhook_url: String,
        channel: Option<String>,
        username: Option<String>,
        min_severity: AlertSeverity,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url,
            channel,
            username,
            min_severity,
        }
    }

    fn payload(&self, alert: &Alert) -> serde_json::Value {
        let color = match alert.severity {
            AlertSeverity::Warning => "#ff9500",  // Orange
            AlertSeverity::Critical => "#ff0000", // Red
        };

        let subject = match &alert.context {
            Some(context) => serde_json::to_value(context).unwrap_or_default(),
            None => serde_json::Value::Null,
        };

        serde_json::json!({
            "username": self.username.as_deref().unwrap_or("Agent OS Monitor"),
            "channel": self.channel,
            "attachments": [{
                "color": color,
                "title": alert.title,
                "text": alert.message,
                "fields": [
                    {
                        "title": "Severity",
                        "value": alert.severity.to_string(),
                        "short": true
                    },
                    {
                        "title": "Context",
                        "value": subject,
                        "short": true
                    },
                    {
                        "title": "Time",
                        "value": alert.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                        "short": true
                    }
                ],
                "footer": "Agent OS Monitoring",
                "ts": alert.created_at.timestamp()
            }]
        })
    }
}

#[async_trait::async_trait]
impl NotificationChannel for SlackChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&self.payload(alert))
            .send()
            .await
            .map_err(|e| {
                MonitorError::notification(format!("Failed to send Slack notification: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(MonitorError::notification(format!(
                "Slack webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "slack"
    }

    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity as u8 >= self.min_severity as u8
    }
}

/// Posts the alert as JSON to an arbitrary endpoint
#[derive(Debug)]
pub struct WebhookChannel {
    client: reqwest::Client,
    name: String,
    url: String,
    min_severity: AlertSeverity,
}

impl WebhookChannel {
    pub fn new(name: String, url: String, min_severity: AlertSeverity) -> Self {
        Self {
            client: reqwest::Client::new(),
            name,
            url,
            min_severity,
        }
    }
}

#[async_trait::async_trait]
impl NotificationChannel for WebhookChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(alert)
            .send()
            .await
            .map_err(|e| {
                MonitorError::notification(format!("Webhook '{}' failed: {}", self.name, e))
            })?;

        if !response.status().is_success() {
            return Err(MonitorError::notification(format!(
                "Webhook '{}' returned status: {}",
                self.name,
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn supports_severity(&self, severity: AlertSeverity) -> bool {
        severity as u8 >= self.min_severity as u8
    }
}
