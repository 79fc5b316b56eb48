//! Configuration module
//!
//! The only configuration source is the process environment. [`GheConfig`]
//! reads it through a lookup function so the rules can be tested without
//! touching the real environment.

use std::fmt;

use crate::error::ConfigError;

/// Variable holding the bearer token
pub const TOKEN_VAR: &str = "GHE_TOKEN";

/// Variable holding the enterprise API base URL
pub const BASE_URL_VAR: &str = "GHE_BASE_URL";

/// Settings needed to build an enterprise API client
#[derive(Clone, PartialEq, Eq)]
pub struct GheConfig {
    /// Bearer token, never empty
    pub token: String,

    /// Base URL used for both the API and the upload roots. Not validated here.
    pub base_url: String,
}

impl GheConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration using `lookup` to resolve variable names
    ///
    /// An unset variable and an empty one are treated the same way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when the token is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR).unwrap_or_default();
        if token.is_empty() {
            return Err(ConfigError::MissingVariable { name: TOKEN_VAR });
        }

        let base_url = lookup(BASE_URL_VAR).unwrap_or_default();
        tracing::debug!("Loaded {} and {}={:?}", TOKEN_VAR, BASE_URL_VAR, base_url);

        Ok(Self { token, base_url })
    }
}

impl fmt::Debug for GheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GheConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
