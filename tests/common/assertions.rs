//! Custom test assertions

use agentos_monitor::monitoring::{ServiceState, StatusSnapshot};
use std::time::Duration;

/// Assertions for StatusSnapshot
pub trait StatusAssertions {
    /// Assert the named service is in the given state
    fn assert_service(&self, name: &str, state: ServiceState);
}

impl StatusAssertions for StatusSnapshot {
    fn assert_service(&self, name: &str, state: ServiceState) {
        let service = self
            .services
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("Service {} missing from status", name));
        assert_eq!(
            service.status, state,
            "Expected {} to be {:?}, got {:?}",
            name, state, service.status
        );
    }
}

/// Poll until `condition` holds or the timeout passes
pub async fn eventually<F>(timeout: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
