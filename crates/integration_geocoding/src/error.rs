//! Error types for the geocoding integrations

use thiserror::Error;

/// Errors that can occur talking to Nominatim
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Invalid client configuration
    #[error("Geocoding configuration error: {0}")]
    ConfigurationError(String),
}

/// Errors that can occur talking to the postal index
#[derive(Debug, Error)]
pub enum PostalIndexError {
    /// Connection to the postal index failed
    #[error("Postal index connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Postal index request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be understood
    #[error("Postal index parse error: {0}")]
    ParseError(String),

    /// Request timeout
    #[error("Postal index request timed out")]
    Timeout,
}

/// Errors that can occur looking up coordinates by IP
#[derive(Debug, Error)]
pub enum IpLocateError {
    /// Connection to the IP locator failed
    #[error("IP locate connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("IP locate request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be understood
    #[error("IP locate parse error: {0}")]
    ParseError(String),

    /// The service refused or could not place the address
    #[error("IP locate service error: {0}")]
    ServiceError(String),

    /// Request timeout
    #[error("IP locate request timed out")]
    Timeout,
}

impl GeocodingError {
    pub(crate) fn from_transport(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}

impl PostalIndexError {
    pub(crate) fn from_transport(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}

impl IpLocateError {
    pub(crate) fn from_transport(e: &reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::ConnectionFailed(e.to_string())
        }
    }
}
