//! Monitor configuration validators
//!
//! This module provides validation implementations for the top-level
//! MonitorConfig and its schedule, alerting, threshold, notification,
//! metrics and server sections.

use super::trait_def::Validate;
use super::url::validate_http_url;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for MonitorConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating monitor configuration");

        self.schedule.validate()?;
        self.incidents.validate()?;
        self.alerts.validate()?;
        self.thresholds.validate()?;

        let mut names = HashSet::new();
        for target in &self.targets {
            target.validate()?;
            if !names.insert(target.name.as_str()) {
                return Err(format!("Duplicate target name: {}", target.name));
            }
        }

        self.remediation.validate()?;
        self.notifications.validate()?;
        self.metrics.validate()?;
        self.server.validate()?;

        Ok(())
    }
}

impl Validate for ScheduleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.check_interval_ms == 0 {
            return Err("Check interval must be greater than 0".to_string());
        }

        if self.incident_review_interval_ms == 0 {
            return Err("Incident review interval must be greater than 0".to_string());
        }

        if self.metrics_interval_ms == 0 {
            return Err("Metrics interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for IncidentConfig {
    fn validate(&self) -> Result<(), String> {
        if self.threshold == 0 {
            return Err("Incident threshold must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Validate for AlertingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.history_limit == 0 {
            return Err("Alert history limit must be greater than 0".to_string());
        }

        if self.cooldown_ms > MAX_ALERT_COOLDOWN_MS {
            return Err(format!(
                "Alert cooldown ({}ms) must not exceed {}ms",
                self.cooldown_ms, MAX_ALERT_COOLDOWN_MS
            ));
        }
        Ok(())
    }
}

impl Validate for ThresholdsConfig {
    fn validate(&self) -> Result<(), String> {
        self.response_time.validate()?;
        self.availability.validate()
    }
}

impl Validate for ResponseTimeThresholds {
    fn validate(&self) -> Result<(), String> {
        if self.warning == 0 || self.critical == 0 {
            return Err("Response time thresholds must be greater than 0".to_string());
        }

        if self.warning > self.critical {
            return Err(format!(
                "Response time warning threshold ({}ms) must not exceed critical threshold ({}ms)",
                self.warning, self.critical
            ));
        }

        Ok(())
    }
}

impl Validate for AvailabilityThresholds {
    fn validate(&self) -> Result<(), String> {
        for (label, value) in [("warning", self.warning), ("critical", self.critical)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!(
                    "Availability {} threshold must be between 0 and 100, got {}",
                    label, value
                ));
            }
        }

        if self.warning < self.critical {
            return Err(format!(
                "Availability warning threshold ({}) must not be below critical threshold ({})",
                self.warning, self.critical
            ));
        }

        Ok(())
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(slack) = &self.slack {
            validate_http_url(&slack.webhook_url, "Slack webhook")?;
        }

        for webhook in &self.webhooks {
            if webhook.name.is_empty() {
                return Err("Webhook channel name cannot be empty".to_string());
            }
            validate_http_url(&webhook.url, &format!("Webhook channel '{}'", webhook.name))?;
        }

        Ok(())
    }
}

impl Validate for MetricsConfig {
    fn validate(&self) -> Result<(), String> {
        let alpha = self.smoothing.alpha;
        if self.smoothing.policy == SmoothingPolicy::Ewma && !(alpha > 0.0 && alpha <= 1.0) {
            return Err(format!(
                "EWMA smoothing alpha must be in (0, 1], got {}",
                alpha
            ));
        }
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0 when the server is enabled".to_string());
        }

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        Ok(())
    }
}
