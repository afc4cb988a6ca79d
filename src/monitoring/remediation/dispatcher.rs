//! Remediation dispatcher implementation

use super::actions::{RemediationAction, build_actions};
use crate::config::{RemediationConfig, TargetConfig};
use crate::monitoring::health::HealthSnapshot;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

/// How a single action ended
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "error", rename_all = "snake_case")]
pub enum ActionOutcome {
    Succeeded,
    Failed(String),
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult {
    pub target: String,
    pub action: String,
    pub outcome: ActionOutcome,
}

/// Everything one remediation run attempted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemediationReport {
    pub results: Vec<ActionResult>,
}

impl RemediationReport {
    pub fn failures(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome != ActionOutcome::Succeeded)
            .count()
    }
}

/// Running totals across remediation runs
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemediationStats {
    pub runs: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub timed_out: u64,
    pub last_run: Option<DateTime<Utc>>,
}

/// Background runs that have not finished yet
#[derive(Debug, Default)]
struct InFlight {
    targets: HashSet<String>,
    /// Registered before spawning; the handle is filled in once spawned
    runs: HashMap<u64, Option<AbortHandle>>,
    next_run: u64,
}

/// Releases a run's targets when its task finishes or is aborted
struct RunGuard {
    in_flight: Arc<Mutex<InFlight>>,
    run: u64,
    targets: Vec<String>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        let mut in_flight = self.in_flight.lock();
        in_flight.runs.remove(&self.run);
        for target in &self.targets {
            in_flight.targets.remove(target);
        }
    }
}

/// Runs corrective actions for unhealthy critical targets
///
/// At most one background run touches a given target at a time.
#[derive(Debug, Clone)]
pub struct RemediationDispatcher {
    enabled: bool,
    action_timeout: Duration,
    actions: Arc<Vec<Arc<dyn RemediationAction>>>,
    stats: Arc<RwLock<RemediationStats>>,
    in_flight: Arc<Mutex<InFlight>>,
}

impl RemediationDispatcher {
    pub fn from_config(config: &RemediationConfig) -> Result<Self> {
        Ok(Self::new(
            config.enabled,
            config.action_timeout(),
            build_actions(&config.actions)?,
        ))
    }

    pub fn new(
        enabled: bool,
        action_timeout: Duration,
        actions: Vec<Arc<dyn RemediationAction>>,
    ) -> Self {
        Self {
            enabled,
            action_timeout,
            actions: Arc::new(actions),
            stats: Arc::new(RwLock::new(RemediationStats::default())),
            in_flight: Arc::new(Mutex::new(InFlight::default())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.actions.is_empty()
    }

    /// Targets that are currently unhealthy and critical
    pub fn candidates(snapshot: &HealthSnapshot, targets: &[TargetConfig]) -> Vec<TargetConfig> {
        targets
            .iter()
            .filter(|target| target.critical)
            .filter(|target| snapshot.get(&target.name).is_some_and(|h| !h.is_healthy()))
            .cloned()
            .collect()
    }

    /// Run remediation for `targets` in a background task
    ///
    /// Targets whose previous run is still in flight are skipped. Returns
    /// `None` when nothing is left to do or there is no runtime to run on.
    pub fn dispatch(&self, targets: Vec<TargetConfig>) -> Option<JoinHandle<RemediationReport>> {
        if !self.is_enabled() || targets.is_empty() {
            return None;
        }

        let handle = tokio::runtime::Handle::try_current().ok()?;

        let (run, ready, names) = {
            let mut in_flight = self.in_flight.lock();
            let (ready, busy): (Vec<TargetConfig>, Vec<TargetConfig>) = targets
                .into_iter()
                .partition(|target| !in_flight.targets.contains(&target.name));

            for target in &busy {
                debug!(target = %target.name, "Remediation still running, skipping target");
            }
            if ready.is_empty() {
                return None;
            }

            let run = in_flight.next_run;
            in_flight.next_run += 1;
            in_flight.runs.insert(run, None);
            let names: Vec<String> = ready.iter().map(|target| target.name.clone()).collect();
            in_flight.targets.extend(names.iter().cloned());
            (run, ready, names)
        };

        let guard = RunGuard {
            in_flight: Arc::clone(&self.in_flight),
            run,
            targets: names,
        };
        let dispatcher = self.clone();
        let task = handle.spawn(async move {
            let _guard = guard;
            dispatcher.run(ready).await
        });

        // A run that already finished has released its slot
        if let Some(slot) = self.in_flight.lock().runs.get_mut(&run) {
            *slot = Some(task.abort_handle());
        }

        Some(task)
    }

    /// Names of targets with a remediation run in flight, sorted
    pub fn in_flight(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.in_flight.lock().targets.iter().cloned().collect();
        targets.sort();
        targets
    }

    /// Abort every background run, returning how many were aborted
    pub fn abort_all(&self) -> usize {
        let runs: Vec<AbortHandle> = self
            .in_flight
            .lock()
            .runs
            .drain()
            .filter_map(|(_, handle)| handle)
            .collect();

        for run in &runs {
            run.abort();
        }
        runs.len()
    }

    /// Run every action against every target, sequentially
    ///
    /// Each action is bounded by the action timeout. A failing action never
    /// stops the ones after it.
    pub async fn run(&self, targets: Vec<TargetConfig>) -> RemediationReport {
        let mut report = RemediationReport::default();

        for target in &targets {
            for action in self.actions.iter() {
                let outcome =
                    match tokio::time::timeout(self.action_timeout, action.execute(target)).await {
                        Ok(Ok(())) => {
                            debug!(target = %target.name, action = action.name(), "Remediation action succeeded");
                            ActionOutcome::Succeeded
                        }
                        Ok(Err(e)) => {
                            warn!(target = %target.name, action = action.name(), "Remediation action failed: {}", e);
                            ActionOutcome::Failed(e.to_string())
                        }
                        Err(_) => {
                            warn!(
                                target = %target.name,
                                action = action.name(),
                                "Remediation action timed out after {:?}",
                                self.action_timeout
                            );
                            ActionOutcome::TimedOut
                        }
                    };

                report.results.push(ActionResult {
                    target: target.name.clone(),
                    action: action.name().to_string(),
                    outcome,
                });
            }
        }

        self.record(&report);
        report
    }

    fn record(&self, report: &RemediationReport) {
        let mut stats = self.stats.write();
        stats.runs += 1;
        stats.last_run = Some(Utc::now());
        for result in &report.results {
            match result.outcome {
                ActionOutcome::Succeeded => stats.succeeded += 1,
                ActionOutcome::Failed(_) => stats.failed += 1,
                ActionOutcome::TimedOut => stats.timed_out += 1,
            }
        }
    }

    pub fn stats(&self) -> RemediationStats {
        self.stats.read().clone()
    }
}
