//! Metrics aggregator implementation

use super::types::CycleMetrics;
use crate::config::{SmoothingConfig, SmoothingPolicy};
use crate::monitoring::health::HealthSnapshot;
use crate::monitoring::types::MetricSample;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct AggregatorState {
    latest: Option<CycleMetrics>,
    smoothed: Option<f64>,
}

/// Computes and holds the latest cycle metrics
#[derive(Debug, Clone)]
pub struct MetricsAggregator {
    smoothing: SmoothingConfig,
    state: Arc<RwLock<AggregatorState>>,
}

impl MetricsAggregator {
    pub fn new(smoothing: SmoothingConfig) -> Self {
        Self {
            smoothing,
            state: Arc::new(RwLock::new(AggregatorState::default())),
        }
    }

    /// Compute this cycle's metrics, advance smoothing and keep the result
    pub fn record(&self, snapshot: &HealthSnapshot) -> CycleMetrics {
        let mut metrics = CycleMetrics::from_snapshot(snapshot);
        let mut state = self.state.write();

        if self.smoothing.policy == SmoothingPolicy::Ewma {
            // Cycles without a successful probe carry no latency information
            if metrics.healthy_targets > 0 {
                let alpha = self.smoothing.alpha;
                let current = metrics.avg_response_time_ms;
                state.smoothed = Some(match state.smoothed {
                    Some(previous) => alpha * current + (1.0 - alpha) * previous,
                    None => current,
                });
            }
            metrics.smoothed_response_time_ms = state.smoothed;
        }

        debug!(
            availability = metrics.availability,
            avg_response_time_ms = metrics.avg_response_time_ms,
            "Recorded cycle metrics"
        );

        state.latest = Some(metrics.clone());
        metrics
    }

    /// Latest recorded metrics, if any cycle ran
    pub fn latest(&self) -> Option<CycleMetrics> {
        self.state.read().latest.clone()
    }

    /// Latest metrics as named samples
    pub fn samples(&self) -> Vec<MetricSample> {
        self.latest().map(|m| m.samples()).unwrap_or_default()
    }
}
