// src/integrations/thumbnail/probe.rs
//
// Thumbnail Probe - the external check collaborator boundary
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - The core consumes the trait only; transport is the probe's concern
// - A probe resolves with a boolean "found" signal or fails with ProbeError
// - Never mutates checker state

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use thiserror::Error;

/// Errors a probe may surface. These never escape the orchestrator as
/// panics; they become a distinct, user-visible check result.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("Probe timed out after {0:?}")]
    Timeout(Duration),

    #[error("Probe unavailable: {0}")]
    Unavailable(String),
}

/// The external "does a thumbnail exist" lookup.
///
/// Resolves `true` when a thumbnail exists for the given URL and episode,
/// `false` when it does not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThumbnailProbe: Send + Sync {
    async fn check_thumbnail(&self, url: &str, episode_id: &str) -> Result<bool, ProbeError>;
}

/// Reference probe: fixed latency, uniformly random outcome.
///
/// Stands in for a real lookup service; only the state-machine contract
/// matters to the core. A real integration replaces this type and keeps the
/// trait.
pub struct SimulatedThumbnailProbe {
    latency: Duration,
}

impl SimulatedThumbnailProbe {
    pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Probe with custom latency (tests use zero)
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedThumbnailProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThumbnailProbe for SimulatedThumbnailProbe {
    async fn check_thumbnail(&self, _url: &str, _episode_id: &str) -> Result<bool, ProbeError> {
        tokio::time::sleep(self.latency).await;
        Ok(rand::thread_rng().gen_bool(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_probe_resolves() {
        let probe = SimulatedThumbnailProbe::with_latency(Duration::ZERO);
        let found = probe.check_thumbnail("https://a.com", "5").await;
        assert!(found.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_probe_waits_configured_latency() {
        let probe = SimulatedThumbnailProbe::new();
        let before = tokio::time::Instant::now();
        probe.check_thumbnail("https://a.com", "5").await.unwrap();
        assert!(before.elapsed() >= SimulatedThumbnailProbe::DEFAULT_LATENCY);
    }
}
