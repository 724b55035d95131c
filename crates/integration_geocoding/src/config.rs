//! Provider configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim geocoding service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Descriptive User-Agent sent with every request (required by the usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Country name used to scope postal-code searches
    #[serde(default = "default_country")]
    pub country: String,

    /// Preferred response language
    #[serde(default = "default_language")]
    pub language: String,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Minimum spacing between requests in milliseconds (0 to disable)
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    concat!("delivery-locator/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_country() -> String {
    "India".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

const fn default_min_request_interval_ms() -> u64 {
    1100
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            user_agent: default_user_agent(),
            country: default_country(),
            language: default_language(),
            timeout_secs: None,
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: Some(5),
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url("nominatim", &self.base_url)?;
        if self.user_agent.trim().is_empty() {
            return Err("nominatim.user_agent must not be empty".to_string());
        }
        if self.country.trim().is_empty() {
            return Err("nominatim.country must not be empty".to_string());
        }
        validate_timeout("nominatim", self.timeout_secs)
    }
}

/// Configuration for the India Post PIN index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalIndexConfig {
    /// Base URL for the postal index API
    #[serde(default = "default_postal_index_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (transport default when unset)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_postal_index_base_url() -> String {
    "https://api.postalpincode.in".to_string()
}

impl Default for PostalIndexConfig {
    fn default() -> Self {
        Self {
            base_url: default_postal_index_base_url(),
            timeout_secs: None,
        }
    }
}

impl PostalIndexConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url("postal_index", &self.base_url)?;
        validate_timeout("postal_index", self.timeout_secs)
    }
}

/// Configuration for the IP geolocation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpLocateConfig {
    /// Base URL for the IP locate API
    #[serde(default = "default_ip_locate_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_ip_locate_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

fn default_ip_locate_base_url() -> String {
    "https://ipapi.co".to_string()
}

#[allow(clippy::unnecessary_wraps)] // serde default must match the field type
const fn default_ip_locate_timeout_secs() -> Option<u64> {
    Some(5)
}

impl Default for IpLocateConfig {
    fn default() -> Self {
        Self {
            base_url: default_ip_locate_base_url(),
            timeout_secs: default_ip_locate_timeout_secs(),
        }
    }
}

impl IpLocateConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        validate_base_url("ip_locate", &self.base_url)?;
        validate_timeout("ip_locate", self.timeout_secs)
    }
}

fn validate_base_url(section: &str, base_url: &str) -> Result<(), String> {
    if base_url.is_empty() {
        return Err(format!("{section}.base_url must not be empty"));
    }
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(format!(
            "{section}.base_url must start with http:// or https://"
        ));
    }
    Ok(())
}

fn validate_timeout(section: &str, timeout_secs: Option<u64>) -> Result<(), String> {
    if timeout_secs == Some(0) {
        return Err(format!("{section}.timeout_secs must be greater than 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_config_default() {
        let config = NominatimConfig::default();
        assert_eq!(config.base_url, "https://nominatim.openstreetmap.org");
        assert!(config.user_agent.starts_with("delivery-locator/"));
        assert_eq!(config.country, "India");
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.min_request_interval_ms, 1100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nominatim_config_for_testing() {
        let config = NominatimConfig::for_testing();
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.min_request_interval_ms, 0);
    }

    #[test]
    fn test_nominatim_config_validation() {
        let config = NominatimConfig {
            user_agent: "  ".to_string(),
            ..NominatimConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("user_agent"));

        let config = NominatimConfig {
            base_url: "nominatim.local".to_string(),
            ..NominatimConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("http"));

        let config = NominatimConfig {
            timeout_secs: Some(0),
            ..NominatimConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("timeout_secs"));
    }

    #[test]
    fn test_postal_index_config() {
        let config = PostalIndexConfig::default();
        assert_eq!(config.base_url, "https://api.postalpincode.in");
        assert!(config.validate().is_ok());

        let config = PostalIndexConfig {
            base_url: String::new(),
            timeout_secs: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ip_locate_config() {
        let config = IpLocateConfig::default();
        assert_eq!(config.base_url, "https://ipapi.co");
        assert_eq!(config.timeout_secs, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: NominatimConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.country, "India");
        assert_eq!(config.min_request_interval_ms, 1100);

        let config: IpLocateConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.timeout_secs, Some(5));
    }
}
