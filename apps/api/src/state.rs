use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests never share mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Default: `LlmClient`. Tests swap in a stub.
    pub llm: Arc<dyn ModelClient>,
    pub config: Config,
}
