// src/application/state.rs

use std::sync::Arc;

use crate::events::EventBus;
use crate::integrations::thumbnail::{SimulatedThumbnailProbe, ThumbnailProbe};
use crate::services::{CheckServiceConfig, ThumbnailCheckService};

/// Application state handed to a presentation layer.
/// All fields are Arc-wrapped for thread-safe sharing across UI callbacks.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub check_service: Arc<ThumbnailCheckService>,
}

impl AppState {
    /// Wire the core against a concrete probe
    pub fn new(probe: Arc<dyn ThumbnailProbe>, config: CheckServiceConfig) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let check_service = Arc::new(ThumbnailCheckService::new(
            probe,
            Arc::clone(&event_bus),
            config,
        ));
        Self {
            event_bus,
            check_service,
        }
    }

    /// Reference wiring: the simulated probe with default configuration
    pub fn with_simulated_probe() -> Self {
        Self::new(
            Arc::new(SimulatedThumbnailProbe::new()),
            CheckServiceConfig::default(),
        )
    }
}
