//! Background task implementations for MonitoringSession

use crate::utils::error::Result;
use std::future::Future;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use tracing::{debug, info, warn};

use super::system::MonitoringSession;

impl MonitoringSession {
    /// Start the probe, metrics and incident review loops
    pub async fn start(&self) -> Result<()> {
        if self.active.swap(true, Ordering::AcqRel) {
            warn!("Monitoring session already running");
            return Ok(());
        }

        info!("Starting monitoring session");
        let schedule = self.config.schedule.clone();

        // Probe cycle task
        let probes = self.spawn_loop(schedule.check_interval(), |session| async move {
            session.run_cycle().await;
        });

        // Metrics publication task
        let metrics = self.spawn_loop(schedule.metrics_interval(), |session| async move {
            session.publish_metrics().await;
        });

        // Incident review task
        let review = self.spawn_loop(schedule.incident_review_interval(), |session| async move {
            let resolved = session.review_incidents().await;
            if !resolved.is_empty() {
                debug!("Incident review resolved {} incidents", resolved.len());
            }
        });

        self.tasks.lock().extend([probes, metrics, review]);

        info!("Monitoring session started successfully");
        Ok(())
    }

    /// Stop all background loops and in-flight remediation
    pub async fn stop(&self) -> Result<()> {
        info!("Stopping monitoring session");
        self.active.store(false, Ordering::Release);

        let tasks: Vec<JoinHandle<()>> = self.tasks.lock().drain(..).collect();
        for task in tasks {
            task.abort();
        }

        let aborted = self.remediation.abort_all();
        if aborted > 0 {
            debug!("Aborted {} in-flight remediation runs", aborted);
        }

        info!("Monitoring session stopped");
        Ok(())
    }

    /// Run `step` on every tick until the session is stopped
    ///
    /// The first tick fires immediately. Ticks missed while a step overruns
    /// are skipped, not replayed.
    fn spawn_loop<F, Fut>(&self, period: Duration, step: F) -> JoinHandle<()>
    where
        F: Fn(MonitoringSession) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let session = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if !session.is_active() {
                    break;
                }
                step(session.clone()).await;
            }
        })
    }
}
