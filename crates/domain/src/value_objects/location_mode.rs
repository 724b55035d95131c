//! Location input mode

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Which signal the user resolves their delivery location from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Device-reported coordinates
    #[default]
    Gps,
    /// Manually entered 6-digit PIN code
    Pin,
}

impl LocationMode {
    /// Label shown on the mode selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gps => "Use GPS",
            Self::Pin => "Enter PIN",
        }
    }
}

impl fmt::Display for LocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gps => write!(f, "gps"),
            Self::Pin => write!(f, "pin"),
        }
    }
}

impl FromStr for LocationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gps" => Ok(Self::Gps),
            "pin" | "pincode" => Ok(Self::Pin),
            other => Err(DomainError::InvalidMode(other.to_string())),
        }
    }
}
