//! Attempt token for request supersession

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonically increasing identifier of a resolution attempt
///
/// Only the most recently issued token is current. Work tagged with any
/// other token must be discarded instead of written to shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct AttemptToken(u64);

impl AttemptToken {
    /// The token held before any attempt was issued
    #[must_use]
    pub const fn initial() -> Self {
        Self(0)
    }

    /// The token issued after this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Raw counter value (for logging)
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AttemptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
