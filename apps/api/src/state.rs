use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::store::MockTestStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generation. Default: `GenerationDispatcher` over the provider
    /// registry built at startup.
    pub llm: Arc<dyn TextGenerator>,
    /// Mock test storage. Default: `InMemoryMockTestStore`.
    pub store: Arc<dyn MockTestStore>,
}
