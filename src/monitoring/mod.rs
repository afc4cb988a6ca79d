//! Health monitoring and incident response
//!
//! A [`MonitoringSession`] owns every component: the probe scheduler and
//! health registry, the threshold evaluator, the metrics aggregator, the alert
//! and incident managers, and the remediation dispatcher. `run_cycle` drives
//! one probe cycle through all of them; `start` runs the cycle, metrics
//! publication and incident review on their own cadences.

// Public submodules
pub mod alerts;
pub mod evaluator;
pub mod health;
pub mod incidents;
pub mod metrics;
pub mod remediation;

// Internal submodules
mod background;
mod system;
mod types;


// Re-export public types
pub use system::{CycleReport, MonitoringSession};
pub use types::{
    Alert, AlertContext, AlertSeverity, MetricSample, ServiceState, ServiceStatus, StatusSnapshot,
};
