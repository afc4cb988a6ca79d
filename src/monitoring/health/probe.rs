//! Probe transports

use super::types::ProbeFailure;
use crate::config::TargetConfig;
use crate::utils::error::Result;
use std::time::{Duration, Instant};

/// A single bounded health check against one target
///
/// Implementations return the round-trip time in milliseconds on success.
/// The scheduler enforces the target timeout around every call, so an
/// implementation does not need to.
#[async_trait::async_trait]
pub trait Prober: Send + Sync + std::fmt::Debug {
    async fn probe(&self, target: &TargetConfig) -> std::result::Result<u64, ProbeFailure>;
}

/// HTTP GET prober; any 2xx status is a success
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("agentos-monitor/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &TargetConfig) -> std::result::Result<u64, ProbeFailure> {
        let start = Instant::now();

        let response = self
            .client
            .get(&target.url)
            .timeout(target.timeout())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeFailure::Timeout {
                        timeout_ms: target.timeout_ms,
                    }
                } else {
                    ProbeFailure::Network(e.to_string())
                }
            })?;

        let elapsed = start.elapsed().as_millis() as u64;
        let status = response.status();

        if status.is_success() {
            Ok(elapsed)
        } else {
            Err(ProbeFailure::UnexpectedStatus(status.as_u16()))
        }
    }
}
