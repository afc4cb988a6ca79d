//! Metrics aggregation
//!
//! Cycle-local system figures (availability, average latency) computed from a
//! registry snapshot, with an opt-in smoothing policy.

mod aggregator;
mod types;


pub use aggregator::MetricsAggregator;
pub use types::CycleMetrics;
