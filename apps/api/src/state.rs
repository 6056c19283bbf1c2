use std::sync::Arc;

use crate::config::Config;
use crate::layout::PageGeometry;
use crate::rewrite::Rewriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that need runtime settings; currently only read
    /// at startup.
    #[allow(dead_code)]
    pub config: Config,
    /// Pluggable rewrite collaborator. Default: LlmRewriter over the shared
    /// LLM client; tests swap in a stub.
    pub rewriter: Arc<dyn Rewriter>,
    /// Page geometry for the preview pagination model. Fixed at startup.
    pub geometry: PageGeometry,
}
