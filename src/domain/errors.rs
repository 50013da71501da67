//! Domain errors for the passive skill catalog.

use thiserror::Error;

/// Errors surfaced by catalog accessors.
///
/// Cloneable so a single failed load can be handed to every caller that was
/// waiting on it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid passive skill payload: {0}")]
    InvalidPayload(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
