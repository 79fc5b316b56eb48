//! Error types for ghe-providers
//!
//! This module defines custom error types using `thiserror`. Each concern gets
//! its own enum and [`GheError`] collects them for the CLI entry point, which
//! maps them to exit codes with [`GheError::exit_code`].

use std::fmt;

use thiserror::Error;

use crate::cli::exit_codes;

/// Main error type for ghe-providers
#[derive(Error, Debug)]
pub enum GheError {
    /// Required environment configuration is missing
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The enterprise API client could not be built
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GheError {
    /// Exit code the CLI terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GheError::Config(_) => exit_codes::CONFIG_ERROR,
            GheError::Client(_) | GheError::Serialize(_) | GheError::Io(_) => exit_codes::ERROR,
        }
    }
}

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{name} is undefined")]
    MissingVariable {
        /// Name of the environment variable
        name: &'static str,
    },
}

/// Errors that occur while building the enterprise API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The builder rejected one of the endpoint URLs
    #[error("Invalid {endpoint} endpoint '{url}': {source}")]
    InvalidEndpoint {
        /// Which root was rejected
        endpoint: Endpoint,
        /// The URL as it was given
        url: String,
        /// The underlying octocrab error
        source: octocrab::Error,
    },

    /// The builder failed after the endpoints were accepted
    #[error("Failed to build client: {source}")]
    Build {
        /// The underlying octocrab error
        source: octocrab::Error,
    },
}

/// API roots configured on the enterprise client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// REST API root
    Api,
    /// Upload API root
    Upload,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Api => write!(f, "API"),
            Endpoint::Upload => write!(f, "upload"),
        }
    }
}
