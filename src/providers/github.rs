//! GitHub Enterprise provider - Authenticated API client construction

use std::fmt;

use octocrab::Octocrab;

use crate::config::GheConfig;
use crate::error::{ClientError, Endpoint, GheError};

/// Authenticated handle on a GitHub Enterprise instance
///
/// The handle is owned by the caller of the factory and is not pooled.
/// Issuing requests is left to callers of [`EnterpriseClient::octocrab`].
pub struct EnterpriseClient {
    inner: Octocrab,
    base_url: String,
}

impl EnterpriseClient {
    /// Build a bearer-token client whose API and upload roots are both `base_url`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidEndpoint`] when the builder rejects the
    /// base URL, and [`ClientError::Build`] when the client itself fails.
    pub fn new(config: &GheConfig) -> Result<Self, ClientError> {
        tracing::debug!("Building GitHub Enterprise client for {:?}", config.base_url);

        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.base_url.as_str())
            .map_err(|source| ClientError::InvalidEndpoint {
                endpoint: Endpoint::Api,
                url: config.base_url.clone(),
                source,
            })?
            .upload_uri(config.base_url.as_str())
            .map_err(|source| ClientError::InvalidEndpoint {
                endpoint: Endpoint::Upload,
                url: config.base_url.clone(),
                source,
            })?;

        let inner = builder
            .build()
            .map_err(|source| ClientError::Build { source })?;

        tracing::info!("GitHub Enterprise client ready for {}", config.base_url);

        Ok(Self {
            inner,
            base_url: config.base_url.clone(),
        })
    }

    /// The underlying octocrab client
    pub fn octocrab(&self) -> &Octocrab {
        &self.inner
    }

    /// Base URL used for both the API and the upload roots
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for EnterpriseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnterpriseClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Read `GHE_TOKEN` and `GHE_BASE_URL` and build an [`EnterpriseClient`]
///
/// A missing token is a [`GheError::Config`]; the caller decides whether to
/// terminate. Client construction failures are returned as [`GheError::Client`].
pub fn acquire_client() -> Result<EnterpriseClient, GheError> {
    let config = GheConfig::from_env()?;
    Ok(EnterpriseClient::new(&config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> GheConfig {
        GheConfig {
            token: "abc123".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_client_built_for_valid_url() {
        let client = EnterpriseClient::new(&config("https://ghe.example.com/api/v3/")).unwrap();
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3/");
    }

    #[tokio::test]
    async fn test_empty_url_rejected_as_api_endpoint() {
        match EnterpriseClient::new(&config("")) {
            Err(ClientError::InvalidEndpoint { endpoint, url, .. }) => {
                assert_eq!(endpoint, Endpoint::Api);
                assert_eq!(url, "");
            }
            other => panic!("expected InvalidEndpoint, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_url_rejected() {
        let result = EnterpriseClient::new(&config("https://exa mple.com/"));
        assert!(matches!(result, Err(ClientError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn test_client_debug_hides_token() {
        let client = EnterpriseClient::new(&config("https://ghe.example.com/api/v3/")).unwrap();
        assert!(!format!("{:?}", client).contains("abc123"));
    }
}
