//! Configuration management for the monitor
//!
//! This module handles loading, validation, and management of all monitor configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the monitor
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Monitor configuration
    pub monitor: MonitorConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let monitor: MonitorConfig = serde_yaml::from_str(content)
            .map_err(|e| MonitorError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { monitor };
        config.validate()?;
        Ok(config)
    }

    /// Apply `MONITOR_*` environment overrides and re-validate
    pub fn apply_env(mut self) -> Result<Self> {
        debug!("Applying environment overrides");

        if let Some(interval) = env_var("MONITOR_CHECK_INTERVAL_MS") {
            self.monitor.schedule.check_interval_ms =
                parse_env("MONITOR_CHECK_INTERVAL_MS", &interval)?;
        }
        if let Some(cooldown) = env_var("MONITOR_ALERT_COOLDOWN_MS") {
            self.monitor.alerts.cooldown_ms = parse_env("MONITOR_ALERT_COOLDOWN_MS", &cooldown)?;
        }
        if let Some(threshold) = env_var("MONITOR_INCIDENT_THRESHOLD") {
            self.monitor.incidents.threshold =
                parse_env("MONITOR_INCIDENT_THRESHOLD", &threshold)?;
        }
        if let Some(webhook_url) = env_var("MONITOR_SLACK_WEBHOOK_URL") {
            match self.monitor.notifications.slack.as_mut() {
                Some(slack) => slack.webhook_url = webhook_url,
                None => {
                    self.monitor.notifications.slack = Some(SlackConfig {
                        webhook_url,
                        channel: None,
                        username: None,
                        min_severity: crate::monitoring::AlertSeverity::Warning,
                    })
                }
            }
        }
        if let Some(host) = env_var("MONITOR_SERVER_HOST") {
            self.monitor.server.host = host;
        }
        if let Some(port) = env_var("MONITOR_SERVER_PORT") {
            self.monitor.server.port = parse_env("MONITOR_SERVER_PORT", &port)?;
        }
        if let Some(level) = env_var("MONITOR_LOG_LEVEL") {
            self.monitor.logging.level = level;
        }

        self.validate()?;
        Ok(self)
    }

    /// Get monitored targets
    pub fn targets(&self) -> &[TargetConfig] {
        &self.monitor.targets
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.monitor.server
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.monitor.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.monitor
            .validate()
            .map_err(|e| MonitorError::Config(format!("Monitor config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.monitor)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.monitor)
            .map_err(|e| MonitorError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| MonitorError::Config(format!("Invalid {}: {}", key, e)))
}
