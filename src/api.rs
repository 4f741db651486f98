//! HTTP API for the chat relay

mod handlers;

pub use handlers::create_router;

use crate::llm::LlmService;
use std::sync::Arc;

/// Application state shared across handlers
///
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmService>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }
}
