//! Indian postal index number (PIN code)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Number of digits in a PIN code
pub const PIN_CODE_LEN: usize = 6;

/// A normalized 6-digit PIN code
///
/// Construction never fails on formatting noise: every non-digit character
/// is stripped and the remainder truncated to six digits. Only inputs that
/// reduce to fewer than six digits are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PinCode(String);

impl PinCode {
    /// Strip non-digits and truncate to [`PIN_CODE_LEN`] characters
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(PIN_CODE_LEN)
            .collect()
    }

    /// Parse user input into a PIN code
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPinCode` if fewer than six digits remain
    /// after normalization.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits = Self::normalize(raw);
        if digits.len() == PIN_CODE_LEN {
            Ok(Self(digits))
        } else {
            Err(DomainError::InvalidPinCode(raw.to_string()))
        }
    }

    /// The six digits as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PinCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PinCode> for String {
    fn from(pin: PinCode) -> Self {
        pin.0
    }
}

impl AsRef<str> for PinCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_plain_pin() {
        let pin = PinCode::parse("411001").expect("valid pin");
        assert_eq!(pin.as_str(), "411001");
    }

    #[test]
    fn strips_formatting() {
        let pin = PinCode::parse(" 560 001 ").expect("valid pin");
        assert_eq!(pin.to_string(), "560001");
        assert_eq!(PinCode::parse("PIN: 110-001").expect("valid").as_str(), "110001");
    }

    #[test]
    fn truncates_to_six_digits() {
        assert_eq!(PinCode::parse("4110019999").expect("valid").as_str(), "411001");
    }

    #[test]
    fn rejects_short_input() {
        assert_eq!(
            PinCode::parse("abc12"),
            Err(DomainError::InvalidPinCode("abc12".to_string()))
        );
        assert!(PinCode::parse("").is_err());
        assert!(PinCode::parse("12345").is_err());
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Devanagari digits are not postal digits
        assert!(PinCode::parse("४११००१").is_err());
    }

    #[test]
    fn serde_uses_plain_string() {
        let pin = PinCode::parse("000000").expect("valid");
        let json = serde_json::to_string(&pin).expect("serialize");
        assert_eq!(json, "\"000000\"");
        assert!(serde_json::from_str::<PinCode>("\"12\"").is_err());
    }

    proptest! {
        #[test]
        fn normalize_keeps_only_ascii_digits(raw in ".*") {
            let digits = PinCode::normalize(&raw);
            prop_assert!(digits.len() <= PIN_CODE_LEN);
            prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn parse_succeeds_iff_six_digits_remain(raw in ".*") {
            let available = raw.chars().filter(char::is_ascii_digit).count();
            prop_assert_eq!(PinCode::parse(&raw).is_ok(), available >= PIN_CODE_LEN);
        }

        #[test]
        fn digits_survive_interleaved_noise(digits in "[0-9]{6}", noise in "[a-zA-Z -]{0,4}") {
            let raw = format!("{noise}{}{noise}{}{noise}", &digits[..3], &digits[3..]);
            prop_assert_eq!(PinCode::parse(&raw).map(String::from), Ok(digits));
        }
    }
}
