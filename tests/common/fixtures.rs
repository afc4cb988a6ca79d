//! Test fixtures and config factories
//!
//! Every factory produces a real, validated configuration.

use agentos_monitor::config::{MonitorConfig, ResponseTimeThresholds, TargetConfig};

/// Factory for monitor configurations
pub struct MonitorConfigFactory;

impl MonitorConfigFactory {
    /// Base config: fast schedule, log channel off, no server
    pub fn base() -> MonitorConfig {
        let mut config = MonitorConfig::default();
        config.schedule.check_interval_ms = 50;
        config.schedule.incident_review_interval_ms = 50;
        config.schedule.metrics_interval_ms = 50;
        config.notifications.log = false;
        config.server.enabled = false;
        config
    }

    /// One critical target probing `<base_url>/health`
    pub fn critical_target(name: &str, base_url: &str) -> MonitorConfig {
        let mut config = Self::base();
        config.targets.push(
            TargetConfig::new(name, format!("{}/health", base_url))
                .critical()
                .with_timeout_ms(1_000),
        );
        config
    }

    /// One non-critical target with a tight latency warning threshold
    pub fn latency_target(name: &str, base_url: &str, warning_ms: u64) -> MonitorConfig {
        let mut config = Self::base();
        let mut target =
            TargetConfig::new(name, format!("{}/health", base_url)).with_timeout_ms(2_000);
        target.response_time = Some(ResponseTimeThresholds {
            warning: warning_ms,
            critical: 10_000,
        });
        config.targets.push(target);
        config
    }
}

/// YAML document with one critical target at `url`
pub fn yaml_with_target(url: &str) -> String {
    format!(
        r#"
schedule:
  check_interval_ms: 1000
incidents:
  threshold: 2
alerts:
  cooldown_ms: 60000
targets:
  - name: agent-api
    url: {url}
    timeout_ms: 500
    critical: true
notifications:
  log: false
server:
  enabled: false
"#
    )
}
