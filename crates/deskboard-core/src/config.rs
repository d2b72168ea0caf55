//! Remote store configuration for client frontends.
//!
//! Resolves the document-store endpoint and optional bearer token from the
//! environment. Secret credentials are read at startup and never persisted.

use crate::error::{Error, Result};
use crate::util::{is_http_url, normalize_text_option};

/// Environment variable naming the document-store base URL.
pub const ENV_STORE_URL: &str = "DESKBOARD_STORE_URL";
/// Environment variable naming the optional bearer token.
pub const ENV_STORE_TOKEN: &str = "DESKBOARD_STORE_TOKEN";

/// Runtime configuration for reaching the remote document store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
}

impl StoreConfig {
    /// Build a config from explicit values, trimming empties away.
    #[must_use]
    pub fn from_values(endpoint: Option<String>, token: Option<String>) -> Self {
        Self {
            endpoint: normalize_text_option(endpoint),
            token: normalize_text_option(token),
        }
    }

    /// Resolve the config from `DESKBOARD_STORE_URL` / `DESKBOARD_STORE_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(ENV_STORE_URL).ok(),
            std::env::var(ENV_STORE_TOKEN).ok(),
        )
    }

    /// Whether an endpoint is present.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Validate and return the endpoint, requiring an http(s) scheme.
    pub fn require_endpoint(&self) -> Result<&str> {
        let endpoint = self.endpoint.as_deref().ok_or_else(|| {
            Error::InvalidInput(format!("store endpoint not configured (set {ENV_STORE_URL})"))
        })?;
        if !is_http_url(endpoint) {
            return Err(Error::InvalidInput(format!(
                "store endpoint must include http:// or https://: {endpoint}"
            )));
        }
        Ok(endpoint)
    }
}
