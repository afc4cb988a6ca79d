//! Configuration loading integration tests
//!
//! Config files are written to temporary directories and loaded the way the
//! binary loads them.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::yaml_with_target;
    use crate::{assert_err, assert_ok};
    use agentos_monitor::config::SmoothingPolicy;
    use agentos_monitor::{Config, MonitorError, MonitoringSession};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// A file on disk drives a real session end to end
    #[tokio::test]
    async fn test_loaded_config_drives_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let file = write_config(&yaml_with_target(&format!("{}/health", server.uri())));
        let config = assert_ok!(Config::from_file(file.path()).await);

        assert_eq!(config.monitor.incidents.threshold, 2);
        assert_eq!(config.targets().len(), 1);

        let session = assert_ok!(MonitoringSession::new(config.monitor));
        session.run_cycle().await;
        let report = session.run_cycle().await;

        assert_eq!(report.incidents_opened.len(), 1);
        assert_eq!(report.incidents_opened[0].service, "agent-api");
    }

    #[tokio::test]
    async fn test_empty_document_uses_defaults() {
        let file = write_config("{}\n");
        let config = assert_ok!(Config::from_file(file.path()).await);

        let monitor = &config.monitor;
        assert_eq!(monitor.schedule.check_interval_ms, 30_000);
        assert_eq!(monitor.incidents.threshold, 3);
        assert_eq!(monitor.alerts.cooldown_ms, 300_000);
        assert_eq!(monitor.alerts.history_limit, 1000);
        assert_eq!(monitor.metrics.smoothing.policy, SmoothingPolicy::None);
        assert_eq!(monitor.server.port, 8088);
        assert!(monitor.targets.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(Config::from_file(dir.path().join("absent.yaml")).await);
        assert!(matches!(err, MonitorError::Config(_)));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let file = write_config(&yaml_with_target("ftp://files.internal/health"));
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("agent-api"));
    }

    #[tokio::test]
    async fn test_duplicate_targets_rejected() {
        let file = write_config(
            r#"
targets:
  - { name: api, url: "http://a.internal/health" }
  - { name: api, url: "http://b.internal/health" }
"#,
        );
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, MonitorError::Config(_)));
    }

    #[tokio::test]
    async fn test_inverted_latency_thresholds_rejected() {
        let file = write_config(
            r#"
thresholds:
  response_time: { warning: 5000, critical: 1000 }
"#,
        );
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[test]
    fn test_yaml_round_trip_keeps_validity() {
        let config = assert_ok!(Config::from_yaml_str(&yaml_with_target(
            "https://agent-api.internal/health"
        )));
        let yaml = assert_ok!(config.to_yaml());
        let reparsed = assert_ok!(Config::from_yaml_str(&yaml));

        assert_eq!(reparsed.targets(), config.targets());
    }
}
