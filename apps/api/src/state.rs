use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text-generation backend. Production: `OpenAiClient`.
    /// Tests swap in a canned generator.
    pub llm: Arc<dyn TextGenerator>,
    /// Reserved for per-request limit overrides; only startup reads it today.
    #[allow(dead_code)]
    pub config: Config,
}
