//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors reported by port implementations
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Provider could not be reached or answered with an error status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider answered with a body that could not be understood
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
