use std::sync::Arc;

use crate::config::Config;
use crate::models::profile::Profile;
use crate::tailoring::ai::TailorBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<Profile>,
    /// Pluggable AI backend. `None` when `GEMINI_API_KEY` is not configured.
    pub tailor: Option<Arc<dyn TailorBackend>>,
    pub config: Config,
}

impl AppState {
    pub fn tailor_backend(&self) -> Option<&dyn TailorBackend> {
        self.tailor.as_deref()
    }
}
