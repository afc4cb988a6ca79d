//! Types for aggregated metrics

use crate::monitoring::health::HealthSnapshot;
use crate::monitoring::types::MetricSample;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// System-wide figures for one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleMetrics {
    pub timestamp: DateTime<Utc>,
    pub total_targets: usize,
    pub healthy_targets: usize,
    pub unhealthy_targets: usize,
    /// Percentage of healthy targets; 100 when nothing is monitored
    pub availability: f64,
    /// Mean response time over this cycle's successful probes; 0 when none
    pub avg_response_time_ms: f64,
    /// EWMA of `avg_response_time_ms`, present only under the EWMA policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed_response_time_ms: Option<f64>,
}

impl CycleMetrics {
    /// Compute the cycle-local figures from a snapshot
    pub fn from_snapshot(snapshot: &HealthSnapshot) -> Self {
        let total_targets = snapshot.len();
        let healthy_targets = snapshot.healthy_count();

        let availability = if total_targets == 0 {
            100.0
        } else {
            healthy_targets as f64 / total_targets as f64 * 100.0
        };

        let response_times: Vec<u64> = snapshot
            .iter()
            .filter(|t| t.is_healthy())
            .filter_map(|t| t.result.response_time_ms)
            .collect();
        let avg_response_time_ms = if response_times.is_empty() {
            0.0
        } else {
            response_times.iter().sum::<u64>() as f64 / response_times.len() as f64
        };

        Self {
            timestamp: snapshot.taken_at,
            total_targets,
            healthy_targets,
            unhealthy_targets: total_targets - healthy_targets,
            availability,
            avg_response_time_ms,
            smoothed_response_time_ms: None,
        }
    }

    /// Flatten into named samples
    pub fn samples(&self) -> Vec<MetricSample> {
        let ts = self.timestamp;
        let mut samples = vec![
            MetricSample::new("availability", self.availability, "percent", ts),
            MetricSample::new("avg_response_time", self.avg_response_time_ms, "ms", ts),
            MetricSample::new("healthy_targets", self.healthy_targets as f64, "count", ts),
            MetricSample::new(
                "unhealthy_targets",
                self.unhealthy_targets as f64,
                "count",
                ts,
            ),
            MetricSample::new("total_targets", self.total_targets as f64, "count", ts),
        ];

        if let Some(smoothed) = self.smoothed_response_time_ms {
            samples.push(MetricSample::new(
                "avg_response_time_smoothed",
                smoothed,
                "ms",
                ts,
            ));
        }

        samples
    }
}
