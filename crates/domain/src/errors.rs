//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input did not reduce to a 6-digit PIN code
    #[error("Invalid PIN code: '{0}'")]
    InvalidPinCode(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unknown location mode name
    #[error("Invalid location mode: {0}. Use 'gps' or 'pin'")]
    InvalidMode(String),
}
