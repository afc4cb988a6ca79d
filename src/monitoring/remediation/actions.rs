//! Remediation action implementations

use crate::config::{RemediationActionConfig, RemediationActionKind, TargetConfig};
use crate::utils::error::{MonitorError, Result};
use std::sync::Arc;
use tracing::info;

/// A corrective action run against an unhealthy target
#[async_trait::async_trait]
pub trait RemediationAction: Send + Sync + std::fmt::Debug {
    /// Action name as configured
    fn name(&self) -> &str;

    /// Carry out the action
    async fn execute(&self, target: &TargetConfig) -> Result<()>;
}

/// Records the intended action without side effects
#[derive(Debug)]
pub struct LogAction {
    name: String,
}

impl LogAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl RemediationAction for LogAction {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, target: &TargetConfig) -> Result<()> {
        info!(target = %target.name, action = %self.name, "Remediation requested");
        Ok(())
    }
}

/// Asks an operator hook to carry out the action
///
/// Body: `{"target": <name>, "action": <name>, "url": <target url>}`.
#[derive(Debug)]
pub struct WebhookAction {
    client: reqwest::Client,
    name: String,
    url: String,
}

impl WebhookAction {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            name: name.into(),
            url: url.into(),
        }
    }
}

#[async_trait::async_trait]
impl RemediationAction for WebhookAction {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self, target: &TargetConfig) -> Result<()> {
        let payload = serde_json::json!({
            "target": target.name,
            "action": self.name,
            "url": target.url,
        });

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MonitorError::remediation(format!("{} hook failed: {}", self.name, e)))?;

        if !response.status().is_success() {
            return Err(MonitorError::remediation(format!(
                "{} hook returned status: {}",
                self.name,
                response.status()
            )));
        }

        Ok(())
    }
}

/// Build the configured actions in order
pub fn build_actions(configs: &[RemediationActionConfig]) -> Result<Vec<Arc<dyn RemediationAction>>> {
    configs
        .iter()
        .map(|config| -> Result<Arc<dyn RemediationAction>> {
            match config.kind {
                RemediationActionKind::Log => Ok(Arc::new(LogAction::new(config.name.clone()))),
                RemediationActionKind::Webhook => {
                    let url = config.url.as_ref().ok_or_else(|| {
                        MonitorError::config(format!(
                            "Remediation action '{}' needs a url",
                            config.name
                        ))
                    })?;
                    Ok(Arc::new(WebhookAction::new(config.name.clone(), url.clone())))
                }
            }
        })
        .collect()
}
