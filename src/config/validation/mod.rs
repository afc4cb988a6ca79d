//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `url`: URL checks shared by targets, channels and hooks
//! - `monitor_validators`: Top-level, schedule, alerting and threshold validators
//! - `target_validators`: Target and remediation validators
//! - `tests`: Test suite for all validators

mod monitor_validators;
mod target_validators;
mod tests;
mod trait_def;
mod url;

pub use trait_def::Validate;
pub use url::validate_http_url;
