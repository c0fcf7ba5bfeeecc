//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KANAP_API_URL` - Product API base URL (default: `http://localhost:3000/api`)
//! - `KANAP_CART_FILE` - Where the cart is persisted (default: `.kanap/cart.json`)
//! - `KANAP_LANGUAGE` - Display language for color names (default: `fr`)
//! - `KANAP_CATALOG_CACHE_TTL_SECS` - How long fetched products are reused (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use kanap_core::Language;
use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_CART_FILE: &str = ".kanap/cart.json";
const DEFAULT_LANGUAGE: &str = "fr";
const DEFAULT_CACHE_TTL_SECS: &str = "300";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the product API; endpoints live under `{api_url}/products`
    pub api_url: Url,
    /// Path of the persisted cart document
    pub cart_file: PathBuf,
    /// Language color names are displayed in
    pub language: Language,
    /// Time-to-live of cached catalog responses
    pub catalog_cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Configuration pointing at `api_url`, every other setting at its default.
    #[must_use]
    pub fn with_api_url(api_url: Url) -> Self {
        Self {
            api_url,
            cart_file: PathBuf::from(DEFAULT_CART_FILE),
            language: Language::French,
            catalog_cache_ttl: Duration::from_secs(300),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api_url = parse_api_url(&get("KANAP_API_URL", DEFAULT_API_URL))?;
        let cart_file = PathBuf::from(get("KANAP_CART_FILE", DEFAULT_CART_FILE));
        let language = get("KANAP_LANGUAGE", DEFAULT_LANGUAGE)
            .parse::<Language>()
            .map_err(|e| ConfigError::InvalidEnvVar("KANAP_LANGUAGE".to_string(), e.to_string()))?;
        let ttl_secs = get("KANAP_CATALOG_CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("KANAP_CATALOG_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_url,
            cart_file,
            language,
            catalog_cache_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

/// Parse the API base URL, rejecting URLs that cannot carry a path.
fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("KANAP_API_URL".to_string(), e.to_string()))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            "KANAP_API_URL".to_string(),
            format!("not an http(s) base URL: {raw}"),
        ));
    }
    Ok(url)
}
