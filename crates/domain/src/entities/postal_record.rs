//! Post-office record from the postal index provider

use serde::{Deserialize, Serialize};

use crate::address::join_present;
use crate::value_objects::PinCode;

/// First post office registered under a PIN code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRecord {
    /// Post office name
    pub name: Option<String>,
    /// Revenue district
    pub district: Option<String>,
    /// State or union territory
    pub state: Option<String>,
}

impl PostalRecord {
    /// Compose `"{code}, {district}, {state}"`, omitting empty segments
    #[must_use]
    pub fn display_for(&self, pin: &PinCode) -> String {
        join_present([
            Some(pin.as_str()),
            self.district.as_deref(),
            self.state.as_deref(),
        ])
        .unwrap_or_else(|| pin.to_string())
    }
}
