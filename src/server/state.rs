//! Application state shared across HTTP handlers

use crate::monitoring::MonitoringSession;

/// HTTP server state shared across handlers
///
/// The session is cheap to clone and shares all of its state, so handlers
/// always see the live registry, alerts and incidents.
#[derive(Clone)]
pub struct AppState {
    pub session: MonitoringSession,
}

impl AppState {
    pub fn new(session: MonitoringSession) -> Self {
        Self { session }
    }
}
