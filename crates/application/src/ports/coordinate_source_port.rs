//! Positioning capability port
//!
//! Wraps whatever produces the user's coordinates (a device API, a fixed
//! configured point, an IP locator) behind one async call.

use std::time::Duration;

use async_trait::async_trait;
use domain::{ErrorKind, GeoLocation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of a positioning request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionOptions {
    /// Ask for the most precise fix available
    pub high_accuracy: bool,
    /// Upper bound on the positioning call
    pub timeout: Duration,
    /// Oldest cached position that may be returned (zero: always fresh)
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

/// Why no position could be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The user refused the permission prompt (code 1)
    #[error("Permission denied")]
    PermissionDenied,

    /// The device could not determine a position (code 2)
    #[error("Position unavailable")]
    PositionUnavailable,

    /// No fix within the requested timeout (code 3)
    #[error("Positioning timed out")]
    Timeout,

    /// No positioning capability on this host
    #[error("Positioning not supported")]
    Unsupported,

    /// Any other failure
    #[error("Positioning failed: {0}")]
    Other(String),
}

impl PositionError {
    /// Map a numeric positioning error code to its variant
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            other => Self::Other(format!("unrecognized error code {other}")),
        }
    }

    /// The resolution error kind this failure is reported as
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PermissionDenied => ErrorKind::PermissionDenied,
            Self::PositionUnavailable => ErrorKind::PositionUnavailable,
            Self::Timeout => ErrorKind::Timeout,
            Self::Unsupported => ErrorKind::Unsupported,
            Self::Other(_) => ErrorKind::Unknown,
        }
    }
}

/// Port for obtaining the user's current coordinates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CoordinateSourcePort: Send + Sync {
    /// Produce one fresh position or a classified failure
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<GeoLocation, PositionError>;
}
