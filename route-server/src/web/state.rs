//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkIndex;
use crate::schedule::{StationDirectory, TrainDirectory};

/// Shared application state.
///
/// Everything in here is built once at startup and read-only afterwards, so
/// handlers on different tasks share it through plain `Arc`s with no
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// The network index queried by the route search
    pub index: Arc<NetworkIndex>,

    /// Station display names (dropdown + result rendering)
    pub stations: Arc<StationDirectory>,

    /// Train display names (result rendering only)
    pub trains: Arc<TrainDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(index: NetworkIndex, stations: StationDirectory, trains: TrainDirectory) -> Self {
        Self {
            index: Arc::new(index),
            stations: Arc::new(stations),
            trains: Arc::new(trains),
        }
    }
}
