//! Integration tests for agentos-monitor
//!
//! These tests drive a full monitoring session against `wiremock` servers
//! over real HTTP.

pub mod config_tests;
pub mod session_tests;
