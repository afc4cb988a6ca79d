//! Concurrent probe fan-out for one cycle

use super::probe::Prober;
use super::types::{ProbeFailure, ProbeReport};
use crate::config::TargetConfig;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// Issues one probe per target, all at once, each under its own timeout
#[derive(Debug, Clone)]
pub struct ProbeScheduler {
    prober: Arc<dyn Prober>,
    targets: Arc<Vec<TargetConfig>>,
}

impl ProbeScheduler {
    pub fn new(prober: Arc<dyn Prober>, targets: Vec<TargetConfig>) -> Self {
        Self {
            prober,
            targets: Arc::new(targets),
        }
    }

    pub fn targets(&self) -> &[TargetConfig] {
        &self.targets
    }

    /// Probe every target concurrently and wait for all of them to settle
    ///
    /// A slow or failing target never delays or cancels its siblings; the
    /// cycle takes at most the largest target timeout.
    pub async fn probe_all(&self) -> Vec<ProbeReport> {
        let probes = self.targets.iter().map(|target| self.probe_one(target));
        let reports = join_all(probes).await;

        let failed = reports.iter().filter(|r| !r.result.is_healthy()).count();
        debug!(
            "Probe cycle finished: {} targets, {} failed",
            reports.len(),
            failed
        );

        reports
    }

    async fn probe_one(&self, target: &TargetConfig) -> ProbeReport {
        let outcome = tokio::time::timeout(target.timeout(), self.prober.probe(target)).await;

        match outcome {
            Ok(Ok(response_time_ms)) => ProbeReport::success(&target.name, response_time_ms),
            Ok(Err(failure)) => {
                warn!(target = %target.name, "Probe failed: {}", failure);
                ProbeReport::failure(&target.name, &failure)
            }
            Err(_) => {
                let failure = ProbeFailure::Timeout {
                    timeout_ms: target.timeout_ms,
                };
                warn!(target = %target.name, "Probe failed: {}", failure);
                ProbeReport::failure(&target.name, &failure)
            }
        }
    }
}
