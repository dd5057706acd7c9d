//! schoolgear-server — mock HTTP query service for the school equipment
//! hierarchy.
//!
//! Four read-only endpoints walk the schools → grades → classes → equipment
//! hierarchy over a static in-memory dataset. See `dataset` for the data,
//! `handlers` for the endpoint contracts, `router` for wiring.

use std::sync::Arc;

pub mod dataset;
pub mod error;
pub mod handlers;
pub mod router;

use dataset::Dataset;

/// Shared application state: the immutable dataset behind an `Arc` so every
/// request handler reads the same copy without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dataset: Arc::new(Dataset::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
