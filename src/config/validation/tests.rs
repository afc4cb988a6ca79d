//! Tests for configuration validation
//!
//! This module contains all tests for the validation logic.

#[cfg(test)]
mod tests {
    use super::super::trait_def::Validate;
    use super::super::url::validate_http_url;
    use crate::config::models::*;

    fn valid_config() -> MonitorConfig {
        MonitorConfig {
            targets: vec![
                TargetConfig::new("api", "https://api.example.com/health").critical(),
                TargetConfig::new("docs", "http://127.0.0.1:8080/ping"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(MonitorConfig::default().validate().is_ok());
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let mut config = valid_config();
        config.schedule.check_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.schedule.incident_review_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_incident_threshold_must_be_positive() {
        let mut config = valid_config();
        config.incidents.threshold = 0;
        let err = config.validate().unwrap_err();
        assert!(err.contains("Incident threshold"));
    }

    #[test]
    fn test_alert_cooldown_upper_bound() {
        let mut config = valid_config();
        config.alerts.cooldown_ms = MAX_ALERT_COOLDOWN_MS;
        assert!(config.validate().is_ok());

        config.alerts.cooldown_ms = 10_u64.pow(16);
        let err = config.validate().unwrap_err();
        assert!(err.contains("Alert cooldown"));

        config.alerts.cooldown_ms = u64::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_target_names_rejected() {
        let mut config = valid_config();
        config
            .targets
            .push(TargetConfig::new("api", "https://other.example.com"));
        let err = config.validate().unwrap_err();
        assert!(err.contains("Duplicate target name"));
    }

    #[test]
    fn test_target_validation() {
        let mut target = TargetConfig::new("api", "ftp://example.com");
        assert!(target.validate().is_err());

        target.url = "https://example.com/health".to_string();
        assert!(target.validate().is_ok());

        target.timeout_ms = 0;
        assert!(target.validate().is_err());

        target.timeout_ms = 1000;
        target.name = "  ".to_string();
        assert!(target.validate().is_err());
    }

    #[test]
    fn test_response_time_thresholds_ordering() {
        let thresholds = ResponseTimeThresholds {
            warning: 5000,
            critical: 1000,
        };
        assert!(thresholds.validate().is_err());

        let mut target = TargetConfig::new("api", "https://example.com");
        target.response_time = Some(thresholds);
        let err = target.validate().unwrap_err();
        assert!(err.starts_with("Target 'api'"));
    }

    #[test]
    fn test_availability_thresholds() {
        let mut thresholds = AvailabilityThresholds::default();
        assert!(thresholds.validate().is_ok());

        thresholds.warning = 101.0;
        assert!(thresholds.validate().is_err());

        thresholds.warning = 90.0;
        thresholds.critical = 95.0;
        assert!(thresholds.validate().is_err());
    }

    #[test]
    fn test_webhook_action_requires_url() {
        let mut action = RemediationActionConfig {
            name: "restart".to_string(),
            kind: RemediationActionKind::Webhook,
            url: None,
        };
        assert!(action.validate().is_err());

        action.url = Some("http://ops.internal/restart".to_string());
        assert!(action.validate().is_ok());

        action.kind = RemediationActionKind::Log;
        action.url = None;
        assert!(action.validate().is_ok());
    }

    #[test]
    fn test_ewma_alpha_bounds() {
        let mut metrics = MetricsConfig::default();
        metrics.smoothing.alpha = 0.0;
        // Alpha is only checked when the policy is enabled
        assert!(metrics.validate().is_ok());

        metrics.smoothing.policy = SmoothingPolicy::Ewma;
        assert!(metrics.validate().is_err());

        metrics.smoothing.alpha = 1.0;
        assert!(metrics.validate().is_ok());
    }

    #[test]
    fn test_server_config_validation() {
        let mut server = ServerConfig::default();
        assert!(server.validate().is_ok());

        server.port = 0;
        assert!(server.validate().is_err());

        server.enabled = false;
        assert!(server.validate().is_ok());
    }

    #[test]
    fn test_validate_http_url() {
        assert!(validate_http_url("https://example.com", "test").is_ok());
        assert!(validate_http_url("http://localhost:3000/health", "test").is_ok());
        assert!(validate_http_url("not a url", "test").is_err());
        assert!(validate_http_url("file:///etc/passwd", "test").is_err());
    }
}
