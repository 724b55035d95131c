//! Provider address records and display-string composition
//!
//! Every provider answer is reduced to one comma-separated line:
//! postal code, then the most specific named area, then the state.

use serde::{Deserialize, Serialize};

/// Display string used when a provider answered without any usable field
pub const LOCATION_DETECTED: &str = "Location detected";

const SEPARATOR: &str = ", ";

/// Address record as returned by a geocoding provider
///
/// All fields are optional; providers omit whatever they do not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAddress {
    pub postcode: Option<String>,
    pub suburb: Option<String>,
    pub city_district: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
}

impl RawAddress {
    /// The most specific named area: suburb, city district, city, town, village
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        [
            &self.suburb,
            &self.city_district,
            &self.city,
            &self.town,
            &self.village,
        ]
        .into_iter()
        .find_map(|field| present(field.as_deref()))
    }
}

/// Compose the display string for a provider address record
///
/// Total and never empty: an address without any usable field yields
/// [`LOCATION_DETECTED`].
#[must_use]
pub fn compose_display(address: &RawAddress) -> String {
    join_present([
        address.postcode.as_deref(),
        address.area(),
        address.state.as_deref(),
    ])
    .unwrap_or_else(|| LOCATION_DETECTED.to_string())
}

/// Join the non-blank segments with `", "`, or `None` if all are blank
pub(crate) fn join_present<'a>(segments: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    let parts: Vec<&str> = segments.into_iter().filter_map(present).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SEPARATOR))
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
