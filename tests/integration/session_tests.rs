//! Monitoring session integration tests
//!
//! Probe cycles run over real HTTP against mock endpoints; notifications and
//! remediation hooks are mock endpoints as well.

#[cfg(test)]
mod tests {
    use crate::assert_ok;
    use crate::common::assertions::{StatusAssertions, eventually};
    use crate::common::MonitorConfigFactory;
    use agentos_monitor::config::{
        RemediationActionConfig, RemediationActionKind, SlackConfig, TargetConfig,
        WebhookChannelConfig,
    };
    use agentos_monitor::monitoring::incidents::IncidentStatus;
    use agentos_monitor::monitoring::{AlertSeverity, ServiceState};
    use agentos_monitor::MonitoringSession;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_status(server: &MockServer, status: u16) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(status))
            .mount(server)
            .await;
    }

    // ==================== Incident lifecycle ====================

    /// Three failed cycles open exactly one incident; a fourth opens none
    #[tokio::test]
    async fn test_incident_opened_on_third_failure() {
        let server = MockServer::start().await;
        mount_status(&server, 503).await;

        let session = assert_ok!(MonitoringSession::new(
            MonitorConfigFactory::critical_target("agent-api", &server.uri())
        ));

        let mut opened_per_cycle = Vec::new();
        for _ in 0..4 {
            let report = session.run_cycle().await;
            opened_per_cycle.push(report.incidents_opened.len());
        }

        assert_eq!(opened_per_cycle, vec![0, 0, 1, 0]);
        assert_eq!(session.incidents().incidents().len(), 1);

        let health = session.registry().get("agent-api").unwrap();
        assert_eq!(health.consecutive_failures, 4);
        assert_eq!(health.last_error.as_deref(), Some("unexpected status 503"));
    }

    /// A recovered target's incident is resolved by the next review
    #[tokio::test]
    async fn test_recovery_resolves_incident() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(3)
            .mount(&server)
            .await;
        mount_status(&server, 200).await;

        let session = assert_ok!(MonitoringSession::new(
            MonitorConfigFactory::critical_target("agent-api", &server.uri())
        ));

        for _ in 0..3 {
            session.run_cycle().await;
        }
        let incident = session.incidents().open_for("agent-api").unwrap();
        session.status().assert_service("agent-api", ServiceState::Unhealthy);

        session.run_cycle().await;
        session.status().assert_service("agent-api", ServiceState::Healthy);

        let resolved = session.review_incidents().await;
        assert_eq!(resolved.len(), 1);

        let incident = session.incidents().get(&incident.id).unwrap();
        assert_eq!(incident.status, IncidentStatus::Resolved);
        assert!(incident.end_time.unwrap() >= incident.start_time);
        assert_eq!(session.status().open_incidents_count, 0);
    }

    /// Non-critical targets fail without opening incidents
    #[tokio::test]
    async fn test_non_critical_target_never_opens_incident() {
        let server = MockServer::start().await;
        mount_status(&server, 503).await;

        let mut config = MonitorConfigFactory::base();
        config
            .targets
            .push(TargetConfig::new("docs", format!("{}/health", server.uri())));
        let session = assert_ok!(MonitoringSession::new(config));

        for _ in 0..5 {
            session.run_cycle().await;
        }

        assert!(session.incidents().incidents().is_empty());
        assert_eq!(session.registry().get("docs").unwrap().consecutive_failures, 5);
    }

    // ==================== Alerts ====================

    /// A warning-level latency breach every cycle yields a single alert
    #[tokio::test]
    async fn test_latency_breach_alerted_once_within_cooldown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(60)))
            .mount(&server)
            .await;

        let session = assert_ok!(MonitoringSession::new(
            MonitorConfigFactory::latency_target("agent-api", &server.uri(), 20)
        ));

        for _ in 0..10 {
            session.run_cycle().await;
        }

        let alerts = session.alerts().alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[0].signature, "latency_warning:agent-api");
        assert_eq!(session.alerts().stats().suppressed_alerts, 9);
    }

    /// Critical alerts reach the configured Slack and webhook channels
    #[tokio::test]
    async fn test_alerts_delivered_to_channels() {
        let target = MockServer::start().await;
        mount_status(&target, 503).await;

        let hooks = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&hooks)
            .await;

        let mut config = MonitorConfigFactory::critical_target("agent-api", &target.uri());
        config.notifications.slack = Some(SlackConfig {
            webhook_url: format!("{}/slack", hooks.uri()),
            channel: Some("#ops".to_string()),
            username: None,
            min_severity: AlertSeverity::Critical,
        });
        config.notifications.webhooks.push(WebhookChannelConfig {
            name: "pager".to_string(),
            url: format!("{}/pager", hooks.uri()),
            min_severity: AlertSeverity::Critical,
        });
        let session = assert_ok!(MonitoringSession::new(config));

        let report = session.run_cycle().await;
        assert!(report.alerts_created >= 1);

        let mut delivered = false;
        for _ in 0..200 {
            let paths: Vec<String> = hooks
                .received_requests()
                .await
                .unwrap_or_default()
                .iter()
                .map(|r| r.url.path().to_string())
                .collect();
            if paths.iter().any(|p| p == "/slack") && paths.iter().any(|p| p == "/pager") {
                delivered = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(delivered, "alert was not delivered to every channel");
    }

    /// A channel that rejects alerts does not stop the alert from being stored
    #[tokio::test]
    async fn test_failing_channel_does_not_block_alerts() {
        let target = MockServer::start().await;
        mount_status(&target, 503).await;

        let mut config = MonitorConfigFactory::critical_target("agent-api", &target.uri());
        config.notifications.webhooks.push(WebhookChannelConfig {
            name: "broken".to_string(),
            url: "http://127.0.0.1:9/hook".to_string(),
            min_severity: AlertSeverity::Warning,
        });
        let session = assert_ok!(MonitoringSession::new(config));

        session.run_cycle().await;
        assert!(!session.alerts().alerts().is_empty());

        let session_ref = &session;
        assert!(
            eventually(Duration::from_secs(2), || {
                session_ref.alerts().notifier().failed_notifications() > 0
            })
            .await
        );
    }

    // ==================== Probing ====================

    /// A hanging target times out without delaying its siblings
    #[tokio::test]
    async fn test_slow_target_does_not_block_cycle() {
        let slow = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
            .mount(&slow)
            .await;
        let fast = MockServer::start().await;
        mount_status(&fast, 200).await;

        let mut config = MonitorConfigFactory::base();
        config
            .targets
            .push(TargetConfig::new("slow", format!("{}/health", slow.uri())).with_timeout_ms(100));
        config
            .targets
            .push(TargetConfig::new("fast", format!("{}/health", fast.uri())));
        let session = assert_ok!(MonitoringSession::new(config));

        let started = Instant::now();
        let report = session.run_cycle().await;
        assert!(started.elapsed() < Duration::from_secs(3));

        assert_eq!(report.metrics.total_targets, 2);
        assert_eq!(report.metrics.availability, 50.0);

        let status = session.status();
        status.assert_service("fast", ServiceState::Healthy);
        status.assert_service("slow", ServiceState::Unhealthy);
        assert_eq!(
            session.registry().get("slow").unwrap().last_error.as_deref(),
            Some("timed out after 100ms")
        );
    }

    // ==================== Remediation ====================

    /// Unhealthy critical targets trigger the configured remediation hook
    #[tokio::test]
    async fn test_remediation_hook_called() {
        let target = MockServer::start().await;
        mount_status(&target, 503).await;

        let ops = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/restart"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&ops)
            .await;

        let mut config = MonitorConfigFactory::critical_target("agent-api", &target.uri());
        config.remediation.actions = vec![
            RemediationActionConfig {
                name: "clear_cache".to_string(),
                kind: RemediationActionKind::Log,
                url: None,
            },
            RemediationActionConfig {
                name: "restart".to_string(),
                kind: RemediationActionKind::Webhook,
                url: Some(format!("{}/restart", ops.uri())),
            },
        ];
        let session = assert_ok!(MonitoringSession::new(config));

        let report = session.run_cycle().await;
        assert_eq!(report.remediation_targets, vec!["agent-api"]);

        let session_ref = &session;
        assert!(
            eventually(Duration::from_secs(2), || {
                session_ref.remediation().stats().succeeded == 2
            })
            .await
        );

        let requests = ops.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["target"], "agent-api");
        assert_eq!(body["action"], "restart");
    }

    /// A slow hook is never called twice at once for the same target
    #[tokio::test]
    async fn test_slow_remediation_not_overlapped() {
        let target = MockServer::start().await;
        mount_status(&target, 503).await;

        let ops = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/restart"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(300)))
            .mount(&ops)
            .await;

        let mut config = MonitorConfigFactory::critical_target("agent-api", &target.uri());
        config.remediation.actions = vec![RemediationActionConfig {
            name: "restart".to_string(),
            kind: RemediationActionKind::Webhook,
            url: Some(format!("{}/restart", ops.uri())),
        }];
        let session = assert_ok!(MonitoringSession::new(config));

        session.run_cycle().await;
        session.run_cycle().await;
        assert_eq!(session.remediation().in_flight(), vec!["agent-api"]);

        let session_ref = &session;
        assert!(
            eventually(Duration::from_secs(3), || {
                session_ref.remediation().in_flight().is_empty()
            })
            .await
        );
        assert_eq!(session.remediation().stats().runs, 1);
        assert_eq!(ops.received_requests().await.unwrap().len(), 1);
    }

    /// Stopping the session aborts remediation still in flight
    #[tokio::test]
    async fn test_stop_aborts_remediation() {
        let target = MockServer::start().await;
        mount_status(&target, 503).await;

        let ops = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/restart"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&ops)
            .await;

        let mut config = MonitorConfigFactory::critical_target("agent-api", &target.uri());
        config.remediation.action_timeout_ms = 30_000;
        config.remediation.actions = vec![RemediationActionConfig {
            name: "restart".to_string(),
            kind: RemediationActionKind::Webhook,
            url: Some(format!("{}/restart", ops.uri())),
        }];
        let session = assert_ok!(MonitoringSession::new(config));

        session.run_cycle().await;
        assert_eq!(session.remediation().in_flight(), vec!["agent-api"]);

        assert_ok!(session.stop().await);

        let session_ref = &session;
        assert!(
            eventually(Duration::from_secs(1), || {
                session_ref.remediation().in_flight().is_empty()
            })
            .await
        );
        assert_eq!(session.remediation().stats().runs, 0);
    }

    // ==================== Background loops ====================

    /// Started sessions probe on their own and stop cleanly
    #[tokio::test]
    async fn test_background_loops() {
        let server = MockServer::start().await;
        mount_status(&server, 200).await;

        let session = assert_ok!(MonitoringSession::new(
            MonitorConfigFactory::critical_target("agent-api", &server.uri())
        ));
        assert_ok!(session.start().await);

        let session_ref = &session;
        assert!(
            eventually(Duration::from_secs(2), || {
                session_ref.registry().get("agent-api").is_some()
            })
            .await
        );
        assert!(
            eventually(Duration::from_secs(2), || {
                !session_ref.metrics().samples().is_empty()
            })
            .await
        );

        assert_ok!(session.stop().await);
        assert!(!session.is_active());
    }
}
