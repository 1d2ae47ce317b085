//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::SubwayNetwork;

/// Shared application state.
///
/// The network sits behind a single lock: reads share it, every mutation
/// takes it exclusively, so section changes to one line never interleave.
#[derive(Clone, Default)]
pub struct AppState {
    pub network: Arc<RwLock<SubwayNetwork>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: SubwayNetwork) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
