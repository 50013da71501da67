use async_trait::async_trait;

use crate::domain::models::{Request, Response};

/// Failures of the request/response exchange itself
///
/// An error *response* from the service is not a `TransportError`; it comes
/// back as a `Response` tagged `error`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port trait for the request/response channel to the game data service
///
/// Implementations own connection lifecycle, framing and request
/// correlation. Callers only see one request in, one response out.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and wait for its response
    ///
    /// # Errors
    /// - `TransportError::Connection` - channel unavailable
    /// - `TransportError::Io` - underlying read/write failed
    /// - `TransportError::Serialization` - message could not be encoded or decoded
    async fn send_and_wait(&self, request: Request) -> Result<Response, TransportError>;
}
