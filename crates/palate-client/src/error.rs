//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Uniform, operation-labeled failure for every access-layer call.
///
/// The label is a static phrase like `"creating item"`, so view code can show
/// `error creating item: ...` without inspecting transport details.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("error {operation}: network error: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("error {operation}: authentication required")]
    Unauthorized { operation: &'static str },

    #[error("error {operation}: server returned {status}: {message}")]
    Status {
        operation: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("error {operation}: invalid response body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("error {operation}: token store: {source}")]
    TokenStore {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ClientError {
    /// The label of the operation that failed, if the error carries one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Network { operation, .. }
            | Self::Unauthorized { operation }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. }
            | Self::TokenStore { operation, .. } => Some(operation),
            Self::Config(_) => None,
        }
    }

    /// True for missing-token and 401/403-class failures.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
