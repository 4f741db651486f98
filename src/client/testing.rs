//! Mock transports for testing
//!
//! These mocks let the store be exercised without a running relay.

use super::{ChatTransport, TransportError};
use crate::wire::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock transport that returns queued outcomes
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<ChatResponse, TransportError>>>,
    /// Record of all requests sent
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn queue(&self, outcome: Result<ChatResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.queue(Ok(ChatResponse::new(text)));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: TransportError) {
        self.queue(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("No mock outcome queued".to_string())))
    }
}

/// Transport whose requests never complete
pub struct StalledTransport;

#[async_trait]
impl ChatTransport for StalledTransport {
    async fn send(&self, _request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        std::future::pending().await
    }
}
