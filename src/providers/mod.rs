//! # Providers Module
//!
//! This module holds the providers protocol document and the GitHub
//! Enterprise client factory.
//!
//! ## Providers Protocol
//!
//! [`ProvidersProtocol`] is the versioned configuration value the CLI prints.
//! It is an enum so exactly one protocol version is ever set. Version 1 has no
//! parameters and is represented by the [`PROVIDERS_V1`] sentinel:
//!
//! ```rust
//! use ghe_providers::providers::{ProvidersProtocol, PROVIDERS_V1};
//!
//! let protocol = ProvidersProtocol::ProvidersV1(PROVIDERS_V1);
//! let json = serde_json::to_string(&protocol).unwrap();
//! assert_eq!(json, r#"{"ProvidersV1":{}}"#);
//! ```
//!
//! ## GitHub Enterprise
//!
//! The [`github`] module builds an authenticated [`github::EnterpriseClient`]
//! from `GHE_TOKEN` and `GHE_BASE_URL`. No request is issued with it.

pub mod github;

use serde::{Deserialize, Serialize};

/// Parameters of provider protocol version 1. There are none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersV1Value {}

/// Sentinel for "provider protocol version 1, no further parameters"
pub const PROVIDERS_V1: ProvidersV1Value = ProvidersV1Value {};

/// The providers configuration document
///
/// Serialized as an object with a single key naming the active version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProvidersProtocol {
    /// Provider protocol version 1
    ProvidersV1(ProvidersV1Value),
}

impl ProvidersProtocol {
    /// Tag of the active version, as it appears in the JSON document
    pub fn version_tag(&self) -> &'static str {
        match self {
            ProvidersProtocol::ProvidersV1(_) => "ProvidersV1",
        }
    }
}

impl Default for ProvidersProtocol {
    fn default() -> Self {
        ProvidersProtocol::ProvidersV1(PROVIDERS_V1)
    }
}
