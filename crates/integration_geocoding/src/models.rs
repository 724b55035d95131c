//! Provider response models

use domain::{PostalRecord, RawAddress};
use serde::{Deserialize, Serialize};

/// One Nominatim place, as returned by `/reverse` and inside `/search` arrays
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NominatimPlace {
    /// Structured address (present when `addressdetails=1`)
    #[serde(default)]
    pub address: Option<RawAddress>,

    /// Full human-readable name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Error text Nominatim returns with HTTP 200 (e.g. "Unable to geocode")
    #[serde(default)]
    pub error: Option<String>,
}

/// One element of the postal index response array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalIndexResponse {
    /// "Success" or "Error"
    #[serde(rename = "Status", default)]
    pub status: String,

    /// Human-readable status text
    #[serde(rename = "Message", default)]
    pub message: Option<String>,

    /// Post offices under the code (`null` when there is no match)
    #[serde(rename = "PostOffice", default)]
    pub post_offices: Option<Vec<PostOffice>>,
}

impl PostalIndexResponse {
    /// Whether the index reported a successful match
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    /// First post office of a successful response
    #[must_use]
    pub fn first_office(&self) -> Option<&PostOffice> {
        if !self.is_success() {
            return None;
        }
        self.post_offices.as_deref().and_then(<[PostOffice]>::first)
    }
}

/// Post-office record in the postal index response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOffice {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "District", default)]
    pub district: Option<String>,

    #[serde(rename = "State", default)]
    pub state: Option<String>,

    #[serde(rename = "Pincode", default)]
    pub pincode: Option<String>,
}

impl From<&PostOffice> for PostalRecord {
    fn from(office: &PostOffice) -> Self {
        Self {
            name: office.name.clone(),
            district: office.district.clone(),
            state: office.state.clone(),
        }
    }
}

/// Response of the IP locate `/json/` endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpLocation {
    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub postal: Option<String>,

    /// Set when the service refused the request
    #[serde(default)]
    pub error: bool,

    /// Reason given with `error`
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_place_parsing() {
        let json = r#"{
            "place_id": 1,
            "display_name": "MG Road, Bengaluru, Karnataka, 560001, India",
            "address": {
                "suburb": "MG Road",
                "city": "Bengaluru",
                "state": "Karnataka",
                "postcode": "560001",
                "country": "India",
                "country_code": "in"
            }
        }"#;
        let place: NominatimPlace = serde_json::from_str(json).unwrap();
        let address = place.address.unwrap();
        assert_eq!(address.postcode.as_deref(), Some("560001"));
        assert_eq!(address.suburb.as_deref(), Some("MG Road"));
        assert!(place.error.is_none());
    }

    #[test]
    fn test_reverse_error_object_parsing() {
        let place: NominatimPlace = serde_json::from_str(r#"{"error":"Unable to geocode"}"#).unwrap();
        assert!(place.address.is_none());
        assert_eq!(place.error.as_deref(), Some("Unable to geocode"));
    }

    #[test]
    fn test_postal_index_success_parsing() {
        let json = r#"[{
            "Message": "Number of pincode(s) found:2",
            "Status": "Success",
            "PostOffice": [
                {"Name": "Pune H.O", "District": "Pune", "State": "Maharashtra", "Pincode": "411001", "Country": "India"},
                {"Name": "Camp", "District": "Pune", "State": "Maharashtra", "Pincode": "411001"}
            ]
        }]"#;
        let responses: Vec<PostalIndexResponse> = serde_json::from_str(json).unwrap();
        let office = responses[0].first_office().unwrap();
        assert_eq!(office.name.as_deref(), Some("Pune H.O"));

        let record = PostalRecord::from(office);
        assert_eq!(record.district.as_deref(), Some("Pune"));
        assert_eq!(record.state.as_deref(), Some("Maharashtra"));
    }

    #[test]
    fn test_postal_index_no_match_parsing() {
        let json = r#"[{"Message":"No records found","Status":"Error","PostOffice":null}]"#;
        let responses: Vec<PostalIndexResponse> = serde_json::from_str(json).unwrap();
        assert!(!responses[0].is_success());
        assert!(responses[0].first_office().is_none());
    }

    #[test]
    fn test_postal_index_success_without_offices() {
        let json = r#"[{"Status":"Success","PostOffice":[]}]"#;
        let responses: Vec<PostalIndexResponse> = serde_json::from_str(json).unwrap();
        assert!(responses[0].first_office().is_none());
    }

    #[test]
    fn test_ip_location_parsing() {
        let json = r#"{"ip":"1.2.3.4","city":"Pune","postal":"411001","latitude":18.52,"longitude":73.85}"#;
        let location: IpLocation = serde_json::from_str(json).unwrap();
        assert_eq!(location.latitude, Some(18.52));
        assert!(!location.error);

        let json = r#"{"error":true,"reason":"RateLimited"}"#;
        let location: IpLocation = serde_json::from_str(json).unwrap();
        assert!(location.error);
        assert_eq!(location.reason.as_deref(), Some("RateLimited"));
    }
}
