//! Gateway Configuration
//!
//! Endpoint and credentials for the hosted row store.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_TABLE: &str = "items";

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Public (anon) API key, sent as `apikey` and bearer token
    pub api_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

impl GatewayConfig {
    /// Build from optional parts, rejecting blanks and non-HTTP URLs
    pub fn from_parts(
        url: Option<&str>,
        api_key: Option<&str>,
        table: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingUrl)?;
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let parsed = reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        let table = table
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TABLE);

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            table: table.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_defaults_table_and_trims_slash() {
        let config = GatewayConfig::from_parts(Some("https://demo.supabase.co/"), Some("anon"), None).unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.api_key, "anon");
        assert_eq!(config.table, "items");
    }

    #[test]
    fn test_from_parts_rejects_missing_values() {
        assert_eq!(
            GatewayConfig::from_parts(None, Some("anon"), None),
            Err(ConfigError::MissingUrl)
        );
        assert_eq!(
            GatewayConfig::from_parts(Some("https://demo.supabase.co"), Some("   "), None),
            Err(ConfigError::MissingApiKey)
        );
    }

    #[test]
    fn test_from_parts_rejects_non_http_url() {
        assert_eq!(
            GatewayConfig::from_parts(Some("ftp://demo"), Some("anon"), None),
            Err(ConfigError::InvalidUrl("ftp://demo".to_string()))
        );
        assert!(matches!(
            GatewayConfig::from_parts(Some("not a url"), Some("anon"), None),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_config_deserializes_without_table() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"url":"https://demo.supabase.co","api_key":"anon"}"#).unwrap();
        assert_eq!(config.table, DEFAULT_TABLE);
    }
}
