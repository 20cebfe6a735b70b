//! # Palate Client
//!
//! Access layer for the Palate REST API: token persistence, an authenticated
//! HTTP wrapper, and typed clients for the users, items, and submissions
//! resources. View layers sit on top of this crate and own all presentation;
//! this crate's contract is that no raw transport failure ever escapes
//! unlabeled and no server-reported failure ever resolves as success.

pub mod config;
pub mod error;
pub mod http;
pub mod items;
pub mod submissions;
pub mod token;
pub mod users;

use std::sync::Arc;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::ApiClient;
pub use items::ItemsClient;
pub use submissions::SubmissionsClient;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use users::UsersClient;

/// Bundle of the three resource clients over one shared [`ApiClient`].
pub struct PalateClient {
    pub users: UsersClient,
    pub items: ItemsClient,
    pub submissions: SubmissionsClient,
}

impl PalateClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let api = Arc::new(ApiClient::new(config, tokens));
        Self {
            users: UsersClient::new(Arc::clone(&api)),
            items: ItemsClient::new(Arc::clone(&api)),
            submissions: SubmissionsClient::new(api),
        }
    }

    /// Client resolved entirely from the environment: configuration via
    /// [`ClientConfig::load`] and the token persisted on disk at the
    /// configured path.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ClientConfig::load()?;
        let tokens = Arc::new(FileTokenStore::new(&config.token.path));
        Ok(Self::new(&config, tokens))
    }
}
