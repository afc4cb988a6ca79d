//! Alert fan-out to notification channels

use super::channels::{LogChannel, NotificationChannel, SlackChannel, WebhookChannel};
use crate::config::NotificationConfig;
use crate::monitoring::types::{Alert, AlertSeverity};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Dispatches alerts to every interested channel
///
/// Each channel is invoked in its own task so a slow or failing channel
/// never delays another one or the caller.
#[derive(Debug, Default)]
pub struct Notifier {
    channels: Vec<Arc<dyn NotificationChannel>>,
    failures: Arc<AtomicU64>,
}

impl Notifier {
    pub fn new(channels: Vec<Arc<dyn NotificationChannel>>) -> Self {
        Self {
            channels,
            failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build the channels listed in the notification config
    pub fn from_config(config: &NotificationConfig) -> Self {
        let mut channels: Vec<Arc<dyn NotificationChannel>> = Vec::new();

        if config.log {
            channels.push(Arc::new(LogChannel::new(AlertSeverity::Warning)));
        }

        if let Some(slack) = &config.slack {
            channels.push(Arc::new(SlackChannel::new(
                slack.webhook_url.clone(),
                slack.channel.clone(),
                slack.username.clone(),
                slack.min_severity,
            )));
        }

        for webhook in &config.webhooks {
            channels.push(Arc::new(WebhookChannel::new(
                webhook.name.clone(),
                webhook.url.clone(),
                webhook.min_severity,
            )));
        }

        Self::new(channels)
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    /// Number of channel sends that failed so far
    pub fn failed_notifications(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Hand the alert to every channel accepting its severity
    ///
    /// Returns the spawned send tasks. Outside a runtime nothing is sent.
    pub fn dispatch(&self, alert: &Alert) -> Vec<JoinHandle<()>> {
        if self.channels.is_empty() {
            return Vec::new();
        }

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(alert_id = %alert.id, "No async runtime, alert not dispatched");
            return Vec::new();
        };

        self.channels
            .iter()
            .filter(|channel| channel.supports_severity(alert.severity))
            .map(|channel| {
                let channel = Arc::clone(channel);
                let failures = Arc::clone(&self.failures);
                let alert = alert.clone();
                handle.spawn(async move {
                    match channel.send(&alert).await {
                        Ok(()) => debug!(channel = channel.name(), alert_id = %alert.id, "Notification sent"),
                        Err(e) => {
                            failures.fetch_add(1, Ordering::Relaxed);
                            warn!(channel = channel.name(), alert_id = %alert.id, "Notification failed: {}", e);
                        }
                    }
                })
            })
            .collect()
    }
}
