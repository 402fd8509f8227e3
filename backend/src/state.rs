//! Application state management

use std::sync::Arc;

use crate::nasa::NasaClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Upstream client for NASA's Open APIs
    pub nasa: Arc<NasaClient>,
}
