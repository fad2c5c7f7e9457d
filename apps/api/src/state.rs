use std::sync::Arc;

use crate::config::Config;
use crate::interview::store::AssessmentStore;
use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Database seam. Default: PgAssessmentStore.
    pub store: Arc<dyn AssessmentStore>,
    /// Model seam. Default: GroqClient.
    pub model: Arc<dyn ModelClient>,
    pub config: Config,
}
