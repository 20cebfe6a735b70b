//! Authenticated HTTP wrapper over the remote API.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::token::TokenStore;

/// Whether an operation must carry the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    None,
}

/// Builds `{method, path, body?, auth}` requests against one immutable base
/// URL, serializing bodies as JSON and attaching `Authorization: Bearer` when
/// required. No retry, no timeout, no cancellation; the caller decides what
/// to do with a failure.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        auth: Auth,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::GET, path, None::<&()>, auth)
            .await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::POST, path, Some(body), auth)
            .await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::PUT, path, Some(body), auth)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        auth: Auth,
    ) -> Result<T, ClientError> {
        self.send(operation, Method::DELETE, path, None::<&()>, auth)
            .await
    }

    /// Single request path shared by every resource client.
    ///
    /// A missing token on an auth-required call fails here, before any
    /// network I/O. 401/403 map to an authentication error, any other
    /// non-success status to a status error carrying the server's body text.
    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method.clone(), &url);

        if auth == Auth::Required {
            let token = self
                .tokens
                .load()
                .map_err(|source| ClientError::TokenStore { operation, source })?
                .ok_or(ClientError::Unauthorized { operation })?;
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, operation, "sending request");

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Network { operation, source })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, operation, "server rejected credentials");
            return Err(ClientError::Unauthorized { operation });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%status, operation, "request failed");
            return Err(ClientError::Status {
                operation,
                status,
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { operation, source })
    }
}
