//! Core MonitoringSession implementation

use crate::config::MonitorConfig;
use crate::utils::error::Result;
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::alerts::{AlertManager, AlertOutcome, AlertTrigger, Notifier};
use super::evaluator::{Breach, evaluate, evaluate_system};
use super::health::{HealthRegistry, HttpProber, ProbeScheduler, Prober};
use super::incidents::{Incident, IncidentManager};
use super::metrics::{CycleMetrics, MetricsAggregator};
use super::remediation::RemediationDispatcher;
use super::types::{Alert, MetricSample, ServiceState, ServiceStatus, StatusSnapshot};

/// What one probe cycle did
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub metrics: CycleMetrics,
    pub breaches: Vec<Breach>,
    pub alerts_created: usize,
    pub alerts_suppressed: usize,
    pub incidents_opened: Vec<Incident>,
    /// Targets handed to the remediation dispatcher
    pub remediation_targets: Vec<String>,
}

impl CycleReport {
    fn tally(&mut self, outcome: AlertOutcome) {
        match outcome {
            AlertOutcome::Created(_) => self.alerts_created += 1,
            AlertOutcome::Suppressed { .. } => self.alerts_suppressed += 1,
        }
    }
}

/// Owns every component of the monitor
///
/// Cloning is cheap; clones share all state. Registry, alert and incident
/// mutations happen only while holding the cycle lock.
#[derive(Debug, Clone)]
pub struct MonitoringSession {
    pub(super) config: Arc<MonitorConfig>,
    pub(super) registry: HealthRegistry,
    pub(super) scheduler: ProbeScheduler,
    pub(super) metrics: MetricsAggregator,
    pub(super) alerts: AlertManager,
    pub(super) incidents: IncidentManager,
    pub(super) remediation: RemediationDispatcher,
    pub(super) cycle_lock: Arc<tokio::sync::Mutex<()>>,
    pub(super) active: Arc<AtomicBool>,
    pub(super) tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
    pub(super) start_time: Instant,
}

impl MonitoringSession {
    /// Create a session probing over HTTP and notifying the configured channels
    pub fn new(config: MonitorConfig) -> Result<Self> {
        let prober = Arc::new(HttpProber::new()?);
        let notifier = Notifier::from_config(&config.notifications);
        Self::with_prober(config, prober, notifier)
    }

    /// Create a session with a custom probe transport and notifier
    pub fn with_prober(
        config: MonitorConfig,
        prober: Arc<dyn Prober>,
        notifier: Notifier,
    ) -> Result<Self> {
        info!(
            "Initializing monitoring session for {} targets",
            config.targets.len()
        );

        let remediation = RemediationDispatcher::from_config(&config.remediation)?;
        let scheduler = ProbeScheduler::new(prober, config.targets.clone());

        Ok(Self {
            registry: HealthRegistry::new(),
            scheduler,
            metrics: MetricsAggregator::new(config.metrics.smoothing.clone()),
            alerts: AlertManager::new(config.alerts.clone(), notifier),
            incidents: IncidentManager::new(config.incidents.threshold),
            remediation,
            cycle_lock: Arc::new(tokio::sync::Mutex::new(())),
            active: Arc::new(AtomicBool::new(false)),
            tasks: Arc::new(Mutex::new(Vec::new())),
            start_time: Instant::now(),
            config: Arc::new(config),
        })
    }

    /// Run one probe cycle end to end
    ///
    /// Probes run outside the cycle lock; applying results, evaluation,
    /// alerting and incident promotion run under it. Remediation is spawned
    /// after the lock is released and never awaited; targets still being
    /// remediated from an earlier cycle are skipped.
    pub async fn run_cycle(&self) -> CycleReport {
        let reports = self.scheduler.probe_all().await;

        let (report, candidates) = {
            let _guard = self.cycle_lock.lock().await;
            let snapshot = self.registry.apply_results(reports);
            let metrics = self.metrics.record(&snapshot);

            let mut report = CycleReport {
                metrics,
                breaches: Vec::new(),
                alerts_created: 0,
                alerts_suppressed: 0,
                incidents_opened: Vec::new(),
                remediation_targets: Vec::new(),
            };

            for target in self.scheduler.targets() {
                let Some(health) = snapshot.get(&target.name) else {
                    continue;
                };

                let thresholds = self.config.response_time_for(target);
                for breach in evaluate(target, &thresholds, health) {
                    report.tally(self.alerts.raise(AlertTrigger::from(breach.clone())));
                    report.breaches.push(breach);
                }

                if let Some(incident) = self.incidents.observe(target, health) {
                    report.tally(self.alerts.raise(AlertTrigger::incident_opened(&incident)));
                    report.incidents_opened.push(incident);
                }
            }

            if let Some(breach) = evaluate_system(
                report.metrics.availability,
                &self.config.thresholds.availability,
            ) {
                report.tally(self.alerts.raise(AlertTrigger::from(breach.clone())));
                report.breaches.push(breach);
            }

            let candidates = RemediationDispatcher::candidates(&snapshot, self.scheduler.targets());
            report.remediation_targets = candidates.iter().map(|t| t.name.clone()).collect();
            (report, candidates)
        };

        self.remediation.dispatch(candidates);

        debug!(
            availability = report.metrics.availability,
            breaches = report.breaches.len(),
            alerts = report.alerts_created,
            suppressed = report.alerts_suppressed,
            "Cycle complete"
        );

        report
    }

    /// Publish the latest metric samples and sweep expired cooldowns
    pub async fn publish_metrics(&self) -> Vec<MetricSample> {
        let _guard = self.cycle_lock.lock().await;
        self.alerts.sweep_expired();

        let samples = self.metrics.samples();
        for sample in &samples {
            info!(
                metric = %sample.name,
                value = sample.value,
                unit = %sample.unit,
                "Metric published"
            );
        }
        samples
    }

    /// Resolve incidents whose targets have recovered
    pub async fn review_incidents(&self) -> Vec<Incident> {
        let _guard = self.cycle_lock.lock().await;
        let snapshot = self.registry.snapshot();

        let resolved = self.incidents.review(&snapshot);
        for incident in &resolved {
            self.alerts.raise(AlertTrigger::incident_resolved(incident));
        }
        resolved
    }

    /// Acknowledge an alert, serialized with the monitoring cycle
    pub async fn acknowledge_alert(&self, id: &str) -> Result<Alert> {
        let _guard = self.cycle_lock.lock().await;
        self.alerts.acknowledge(id)
    }

    /// Resolve an alert, serialized with the monitoring cycle
    pub async fn resolve_alert(&self, id: &str) -> Result<Alert> {
        let _guard = self.cycle_lock.lock().await;
        self.alerts.resolve(id)
    }

    /// Status of every configured target plus alert and incident counts
    pub fn status(&self) -> StatusSnapshot {
        let snapshot = self.registry.snapshot();

        let services = self
            .config
            .targets
            .iter()
            .map(|target| match snapshot.get(&target.name) {
                Some(health) => ServiceStatus {
                    name: target.name.clone(),
                    status: if health.is_healthy() {
                        ServiceState::Healthy
                    } else {
                        ServiceState::Unhealthy
                    },
                    critical: target.critical,
                    response_time_ms: health.result.response_time_ms,
                    last_check: Some(health.result.timestamp),
                    consecutive_failures: health.consecutive_failures,
                    last_error: health.last_error.clone(),
                },
                None => ServiceStatus {
                    name: target.name.clone(),
                    status: ServiceState::Unknown,
                    critical: target.critical,
                    response_time_ms: None,
                    last_check: None,
                    consecutive_failures: 0,
                    last_error: None,
                },
            })
            .collect();

        StatusSnapshot {
            availability: CycleMetrics::from_snapshot(&snapshot).availability,
            services,
            active_alerts_count: self.alerts.active_count(),
            open_incidents_count: self.incidents.open_count(),
            timestamp: Utc::now(),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn registry(&self) -> &HealthRegistry {
        &self.registry
    }

    pub fn metrics(&self) -> &MetricsAggregator {
        &self.metrics
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn incidents(&self) -> &IncidentManager {
        &self.incidents
    }

    pub fn remediation(&self) -> &RemediationDispatcher {
        &self.remediation
    }

    /// Check if the background tasks are running
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}
