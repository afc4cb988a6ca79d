//! Alert management system
//!
//! Breaches and incident transitions become alerts here. Duplicates are
//! suppressed per signature for the configured cooldown, and created alerts
//! are fanned out to the notification channels.

mod channels;
mod manager;
mod notifier;
mod types;


pub use channels::{LogChannel, NotificationChannel, SlackChannel, WebhookChannel};
pub use manager::AlertManager;
pub use notifier::Notifier;
pub use types::{AlertCategory, AlertOutcome, AlertSignature, AlertStats, AlertTrigger};
