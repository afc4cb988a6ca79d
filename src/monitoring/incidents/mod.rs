//! Incident lifecycle tracking
//!
//! A critical target that keeps failing is promoted to an open incident. The
//! periodic review resolves it once the target is healthy again.

mod manager;
mod types;


pub use manager::IncidentManager;
pub use types::{Incident, IncidentStatus, TimelineEntry};
