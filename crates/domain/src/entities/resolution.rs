//! Resolution attempts, outcomes and the state shown to the user

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::LocationMode;

/// One user-initiated resolution request
///
/// Immutable once created; a later query supersedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    mode: LocationMode,
    raw_input: Option<String>,
}

impl LocationQuery {
    /// A request to resolve from device coordinates
    #[must_use]
    pub const fn gps() -> Self {
        Self {
            mode: LocationMode::Gps,
            raw_input: None,
        }
    }

    /// A request to resolve from typed PIN input (not yet normalized)
    #[must_use]
    pub fn pin(raw_input: impl Into<String>) -> Self {
        Self {
            mode: LocationMode::Pin,
            raw_input: Some(raw_input.into()),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> LocationMode {
        self.mode
    }

    #[must_use]
    pub fn raw_input(&self) -> Option<&str> {
        self.raw_input.as_deref()
    }
}

/// A successfully resolved delivery location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Single display line, never empty
    pub display: String,
    /// Signal the location was resolved from
    pub source_mode: LocationMode,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(display: impl Into<String>, source_mode: LocationMode) -> Self {
        Self {
            display: display.into(),
            source_mode,
        }
    }
}

/// Classified cause of a failed resolution
///
/// Each kind has exactly one user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// PIN input did not reduce to six digits
    InvalidInput,
    /// User refused the positioning permission
    PermissionDenied,
    /// The device could not determine a position
    PositionUnavailable,
    /// Positioning did not finish in time
    Timeout,
    /// No positioning capability on this host
    Unsupported,
    /// No address matched a valid code or coordinate
    NotFound,
    /// Transport or parse failure talking to a provider
    NetworkError,
    /// Anything not classified above
    Unknown,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 8] = [
        Self::InvalidInput,
        Self::PermissionDenied,
        Self::PositionUnavailable,
        Self::Timeout,
        Self::Unsupported,
        Self::NotFound,
        Self::NetworkError,
        Self::Unknown,
    ];

    /// Fixed user-facing message for this kind
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidInput => "Please enter a valid 6-digit PIN code.",
            Self::PermissionDenied => {
                "Location permission denied. Please allow access or enter PIN code."
            },
            Self::PositionUnavailable => {
                "Location unavailable. Please try again or enter PIN code."
            },
            Self::Timeout => "Location timeout. Please try again or enter PIN code.",
            Self::Unsupported => "GPS not supported. Please enter your PIN code.",
            Self::NotFound => "We couldn't find this PIN. Please check and try again.",
            Self::NetworkError => "Unable to reach the location service. Please try again.",
            Self::Unknown => "Unable to detect location. Please try again or enter PIN code.",
        }
    }
}

/// A failed resolution as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ResolutionError {
    kind: ErrorKind,
    message: String,
}

impl ResolutionError {
    /// Build the error for a kind; the message is always the kind's template
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for ResolutionError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The single source of truth for what the user currently sees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum ResolutionState {
    /// Nothing requested, or the last request was cleared
    #[default]
    Idle,
    /// An attempt is running
    InProgress,
    /// The latest attempt produced a location
    Resolved(ResolvedLocation),
    /// The latest attempt failed
    Failed(ResolutionError),
}

impl ResolutionState {
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }

    /// The resolved location, if any
    #[must_use]
    pub const fn location(&self) -> Option<&ResolvedLocation> {
        match self {
            Self::Resolved(location) => Some(location),
            _ => None,
        }
    }

    /// The failure, if any
    #[must_use]
    pub const fn error(&self) -> Option<&ResolutionError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Kind of the failure, if any
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(ResolutionError::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_has_a_distinct_message() {
        let messages: HashSet<&str> = ErrorKind::ALL.iter().map(|k| k.message()).collect();
        assert_eq!(messages.len(), ErrorKind::ALL.len());
        assert!(messages.iter().all(|m| !m.is_empty()));
    }

    #[test]
    fn device_denials_have_distinct_prefixes() {
        assert!(ErrorKind::PermissionDenied.message().starts_with("Location permission denied"));
        assert!(ErrorKind::PositionUnavailable.message().starts_with("Location unavailable"));
        assert!(ErrorKind::Timeout.message().starts_with("Location timeout"));
        assert!(ErrorKind::Unknown.message().starts_with("Unable to detect location"));
    }

    #[test]
    fn resolution_error_uses_kind_template() {
        let err = ResolutionError::new(ErrorKind::NotFound);
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), ErrorKind::NotFound.message());
        assert_eq!(err.to_string(), err.message());
        assert_eq!(ResolutionError::from(ErrorKind::Timeout).kind(), ErrorKind::Timeout);
    }

    #[test]
    fn query_constructors() {
        let gps = LocationQuery::gps();
        assert_eq!(gps.mode(), LocationMode::Gps);
        assert_eq!(gps.raw_input(), None);

        let pin = LocationQuery::pin("abc12");
        assert_eq!(pin.mode(), LocationMode::Pin);
        assert_eq!(pin.raw_input(), Some("abc12"));
    }

    #[test]
    fn state_accessors() {
        assert!(ResolutionState::InProgress.is_in_progress());
        assert!(ResolutionState::Idle.location().is_none());

        let resolved = ResolutionState::Resolved(ResolvedLocation::new("Goa", LocationMode::Pin));
        assert_eq!(resolved.location().map(|l| l.display.as_str()), Some("Goa"));
        assert_eq!(resolved.error_kind(), None);

        let failed = ResolutionState::Failed(ResolutionError::new(ErrorKind::InvalidInput));
        assert_eq!(failed.error_kind(), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn state_serializes_with_status_tag() {
        let json = serde_json::to_value(ResolutionState::Resolved(ResolvedLocation::new(
            "411001, Pune, Maharashtra",
            LocationMode::Pin,
        )))
        .expect("serialize");
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["detail"]["display"], "411001, Pune, Maharashtra");
        assert_eq!(json["detail"]["source_mode"], "pin");

        let idle = serde_json::to_value(ResolutionState::Idle).expect("serialize");
        assert_eq!(idle["status"], "idle");

        let failed = serde_json::to_value(ResolutionState::Failed(ResolutionError::new(
            ErrorKind::NetworkError,
        )))
        .expect("serialize");
        assert_eq!(failed["detail"]["kind"], "network_error");
    }
}
