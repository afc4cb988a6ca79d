//! Common test utilities for agentos-monitor
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::MonitorConfigFactory;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = wiremock::MockServer::start().await;
//!     let config = MonitorConfigFactory::critical_target("api", &server.uri());
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use fixtures::MonitorConfigFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(_) => panic!("Expected Err, got Ok"),
            Err(e) => e,
        }
    };
}
