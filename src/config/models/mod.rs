//! Configuration data models
//!
//! This module defines all configuration structures used throughout the monitor.

#![allow(missing_docs)]

pub mod monitor;
pub mod monitoring;
pub mod notification;
pub mod remediation;
pub mod schedule;
pub mod server;
pub mod target;

// Re-export all configuration types
pub use monitor::*;
pub use monitoring::*;
pub use notification::*;
pub use remediation::*;
pub use schedule::*;
pub use server::*;
pub use target::*;

/// Default interval between probe cycles in milliseconds
pub fn default_check_interval_ms() -> u64 {
    30_000
}

/// Default interval between incident review passes in milliseconds
pub fn default_incident_review_interval_ms() -> u64 {
    60_000
}

/// Default interval between metrics publications in milliseconds
pub fn default_metrics_interval_ms() -> u64 {
    60_000
}

pub fn default_incident_threshold() -> u32 {
    3
}

/// Upper bound accepted for `alerts.cooldown_ms` (30 days)
pub const MAX_ALERT_COOLDOWN_MS: u64 = 30 * 24 * 60 * 60 * 1000;

pub fn default_alert_cooldown_ms() -> u64 {
    300_000 // 5 minutes
}

pub fn default_alert_history_limit() -> usize {
    1000
}

/// Default per-probe timeout in milliseconds
pub fn default_probe_timeout_ms() -> u64 {
    5_000
}

pub fn default_response_time_warning_ms() -> u64 {
    1_000
}

pub fn default_response_time_critical_ms() -> u64 {
    3_000
}

pub fn default_availability_warning() -> f64 {
    99.0
}

pub fn default_availability_critical() -> f64 {
    95.0
}

pub fn default_action_timeout_ms() -> u64 {
    10_000
}

pub fn default_smoothing_alpha() -> f64 {
    0.3
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8088
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
