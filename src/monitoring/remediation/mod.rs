//! Best-effort auto-remediation
//!
//! Unhealthy critical targets get the configured corrective actions run
//! against them in a background task. Outcomes are logged and counted, never
//! propagated; the next probe cycle is the only verification.

mod actions;
mod dispatcher;


pub use actions::{LogAction, RemediationAction, WebhookAction, build_actions};
pub use dispatcher::{
    ActionOutcome, ActionResult, RemediationDispatcher, RemediationReport, RemediationStats,
};
