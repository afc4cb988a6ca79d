//! # Agent OS Monitor
//!
//! Production health monitoring and incident response for Agent OS services.
//!
//! ## Features
//!
//! - **Concurrent probing**: one bounded HTTP GET per target per cycle, in parallel
//! - **Threshold alerts**: latency and availability breaches, deduplicated by signature
//!   with a cooldown window
//! - **Incident lifecycle**: sustained failures of critical targets open incidents that
//!   resolve automatically on recovery
//! - **Auto-remediation**: best-effort, time-bounded corrective actions
//! - **Status API**: status, metrics, alerts and incidents over HTTP
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agentos_monitor::{Config, Monitor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/monitor.yaml").await?;
//!     let monitor = Monitor::new(config)?;
//!     monitor.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Single cycle
//!
//! ```rust,no_run
//! use agentos_monitor::{Config, MonitoringSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/monitor.yaml").await?;
//!     let session = MonitoringSession::new(config.monitor)?;
//!     session.run_cycle().await;
//!     println!("{}", serde_json::to_string_pretty(&session.status())?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod monitoring;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use monitoring::{CycleReport, MonitoringSession, StatusSnapshot};
pub use utils::error::{MonitorError, Result};

use tracing::info;

/// The monitoring daemon: a session plus its optional status API
pub struct Monitor {
    config: Config,
    session: MonitoringSession,
}

impl Monitor {
    /// Create a new monitor instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new monitor instance");
        let session = MonitoringSession::new(config.monitor.clone())?;
        Ok(Self { config, session })
    }

    pub fn session(&self) -> &MonitoringSession {
        &self.session
    }

    /// Run the background loops and the status API until shutdown
    pub async fn run(self) -> Result<()> {
        info!("Starting Agent OS monitor");
        self.session.start().await?;

        let result = if self.config.server().enabled {
            // The actix server handles Ctrl+C and SIGTERM itself
            server::HttpServer::new(self.config.server(), self.session.clone())
                .start()
                .await
        } else {
            server::HttpServer::shutdown_signal().await;
            Ok(())
        };

        self.session.stop().await?;
        result
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
