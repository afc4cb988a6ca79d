//! Error handling for the monitor
//!
//! This module defines all error types used throughout the monitoring engine.

#![allow(missing_docs)]

mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{MonitorError, Result};
