//! Value Objects - Immutable, identity-less domain primitives

mod attempt_token;
mod geo_location;
mod location_mode;
mod pin_code;

pub use attempt_token::AttemptToken;
pub use geo_location::GeoLocation;
pub use location_mode::LocationMode;
pub use pin_code::{PIN_CODE_LEN, PinCode};
