//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Fallback when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default location of the persisted session token.
pub const DEFAULT_TOKEN_PATH: &str = ".palate/token";

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub token: TokenSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenSettings {
    pub path: String,
}

impl ClientConfig {
    /// Resolve configuration once at startup: hardcoded defaults, an optional
    /// config file, then the environment (`PALATE__API__BASE_URL` and
    /// `PALATE__TOKEN__PATH`). The result is immutable for the process
    /// lifetime.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("token.path", DEFAULT_TOKEN_PATH)?
            .add_source(File::with_name("config/palate").required(false))
            .add_source(Environment::with_prefix("PALATE").separator("__"))
            .build()?;
        config.try_deserialize()
    }

    /// Configuration pointing at an explicit base URL, defaults elsewhere.
    /// Used by embedders and tests that talk to a known server.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSettings {
                base_url: base_url.into(),
            },
            token: TokenSettings {
                path: DEFAULT_TOKEN_PATH.to_string(),
            },
        }
    }
}
