//! Health probing and the per-target health registry
//!
//! The scheduler issues one bounded probe per target concurrently; the
//! registry keeps the latest result per target and hands out consistent
//! snapshots.

mod probe;
mod registry;
mod scheduler;
mod types;


pub use probe::{HttpProber, Prober};
pub use registry::HealthRegistry;
pub use scheduler::ProbeScheduler;
pub use types::{
    HealthCheckResult, HealthSnapshot, HealthStatus, ProbeFailure, ProbeReport, TargetHealth,
};
