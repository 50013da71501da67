//! Mock transport for testing

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::models::{MessageType, Request, Response};
use crate::domain::ports::{Transport, TransportError};

/// Scripted in-memory transport.
///
/// Answers every request with the configured outcome, optionally after a
/// delay, and counts how many requests it has seen.
pub struct MockTransport {
    outcome: Mutex<Result<Response, TransportError>>,
    delay: Option<Duration>,
    requests: AtomicUsize,
}

impl MockTransport {
    pub fn new(outcome: Result<Response, TransportError>) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            delay: None,
            requests: AtomicUsize::new(0),
        }
    }

    /// Succeeds with the given key -> skill mapping.
    pub fn with_skills(skills: Value) -> Self {
        Self::new(Ok(Response::success(MessageType::GetPassiveSkills, skills)))
    }

    /// Answers with an error response carrying `message`.
    pub fn with_error(message: impl Into<String>) -> Self {
        Self::new(Ok(Response::error(message)))
    }

    /// Fails the exchange itself.
    pub fn failing(error: TransportError) -> Self {
        Self::new(Err(error))
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Switch subsequent requests to succeed with `skills`.
    pub async fn set_skills(&self, skills: Value) {
        *self.outcome.lock().await = Ok(Response::success(MessageType::GetPassiveSkills, skills));
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_and_wait(&self, request: Request) -> Result<Response, TransportError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(message_type = %request.message_type, "Mock transport request");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcome.lock().await.clone()
    }
}
