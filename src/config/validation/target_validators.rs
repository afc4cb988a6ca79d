//! Target and remediation validators

use super::trait_def::Validate;
use super::url::validate_http_url;
use crate::config::models::*;

impl Validate for TargetConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Target name cannot be empty".to_string());
        }

        validate_http_url(&self.url, &format!("Target '{}'", self.name))?;

        if self.timeout_ms == 0 {
            return Err(format!(
                "Target '{}' timeout must be greater than 0",
                self.name
            ));
        }

        if let Some(thresholds) = &self.response_time {
            thresholds
                .validate()
                .map_err(|e| format!("Target '{}': {}", self.name, e))?;
        }

        Ok(())
    }
}

impl Validate for RemediationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.action_timeout_ms == 0 {
            return Err("Remediation action timeout must be greater than 0".to_string());
        }

        for action in &self.actions {
            action.validate()?;
        }

        Ok(())
    }
}

impl Validate for RemediationActionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Remediation action name cannot be empty".to_string());
        }

        match (self.kind, &self.url) {
            (RemediationActionKind::Webhook, Some(url)) => {
                validate_http_url(url, &format!("Remediation action '{}'", self.name))
            }
            (RemediationActionKind::Webhook, None) => Err(format!(
                "Remediation action '{}' of type webhook requires a url",
                self.name
            )),
            (RemediationActionKind::Log, _) => Ok(()),
        }
    }
}
