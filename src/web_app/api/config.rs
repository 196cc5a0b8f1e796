// web_app/api/config.rs - Service configuration
//
// Values are read from the environment (after `dotenv` has loaded `.env`).
// `from_lookup` takes the lookup as a closure so tests can feed a map.

use std::env;

use super::error::ConfigError;

pub const DEFAULT_CATALOG_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_STORE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Movie catalog (TMDB) settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Document store (Appwrite) settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key; requests go out anonymously when unset
    pub api_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveryConfig {
    pub catalog: CatalogConfig,
    pub store: StoreConfig,
}

impl DiscoveryConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| value(name).ok_or(ConfigError::Missing(name));
        let url = |name: &'static str, default: &str| -> Result<String, ConfigError> {
            let raw = value(name).unwrap_or_else(|| default.to_string());
            if raw.starts_with("http://") || raw.starts_with("https://") {
                Ok(raw.trim_end_matches('/').to_string())
            } else {
                Err(ConfigError::InvalidUrl { name, value: raw })
            }
        };

        Ok(DiscoveryConfig {
            catalog: CatalogConfig {
                base_url: url("TMDB_API_BASE_URL", DEFAULT_CATALOG_URL)?,
                api_key: required("TMDB_API_KEY")?,
            },
            store: StoreConfig {
                endpoint: url("APPWRITE_ENDPOINT", DEFAULT_STORE_ENDPOINT)?,
                project_id: required("APPWRITE_PROJECT_ID")?,
                database_id: required("APPWRITE_DATABASE_ID")?,
                collection_id: required("APPWRITE_COLLECTION_ID")?,
                api_key: value("APPWRITE_API_KEY"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const MINIMAL: &[(&str, &str)] = &[
        ("TMDB_API_KEY", "tmdb-token"),
        ("APPWRITE_PROJECT_ID", "project"),
        ("APPWRITE_DATABASE_ID", "db"),
        ("APPWRITE_COLLECTION_ID", "metrics"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = DiscoveryConfig::from_lookup(lookup(MINIMAL)).unwrap();
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.catalog.api_key, "tmdb-token");
        assert_eq!(config.store.endpoint, DEFAULT_STORE_ENDPOINT);
        assert_eq!(config.store.collection_id, "metrics");
        assert!(config.store.api_key.is_none());
    }

    #[test]
    fn test_missing_api_key() {
        let err = DiscoveryConfig::from_lookup(lookup(&MINIMAL[1..])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TMDB_API_KEY"));
        assert_eq!(err.to_string(), "TMDB_API_KEY must be set");
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("APPWRITE_API_KEY", "   "));
        pairs[1] = ("APPWRITE_PROJECT_ID", "");
        let err = DiscoveryConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("APPWRITE_PROJECT_ID"));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("TMDB_API_BASE_URL", "http://localhost:9000/3/"));
        pairs.push(("APPWRITE_API_KEY", "secret"));
        let config = DiscoveryConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.catalog.base_url, "http://localhost:9000/3");
        assert_eq!(config.store.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let mut pairs = MINIMAL.to_vec();
        pairs.push(("APPWRITE_ENDPOINT", "cloud.appwrite.io"));
        let err = DiscoveryConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { name: "APPWRITE_ENDPOINT", .. }));
    }
}
