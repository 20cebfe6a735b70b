//! Users resource client: registration, login, and profile management.

use std::sync::Arc;

use palate_shared::{
    Credentials, MessageResponse, NewUser, RegisterResponse, TokenResponse, UserProfile, UserUpdate,
};
use tracing::info;

use crate::error::ClientError;
use crate::http::{ApiClient, Auth};

pub struct UsersClient {
    api: Arc<ApiClient>,
}

impl UsersClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Register a new account. Returns the server-assigned user id.
    pub async fn register(&self, new_user: &NewUser) -> Result<String, ClientError> {
        let created: RegisterResponse = self
            .api
            .post("registering user", "/users/", new_user, Auth::None)
            .await?;
        info!(username = %new_user.username, "registered user");
        Ok(created.user_id)
    }

    /// Exchange credentials for a session token.
    ///
    /// The token is returned exactly as the server issued it and is NOT
    /// persisted here; handing it to the token store is the caller's explicit
    /// next step.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let token: TokenResponse = self
            .api
            .post("logging in", "/tokens/", credentials, Auth::None)
            .await?;
        info!(username = %credentials.username, "login succeeded");
        Ok(token.access_token)
    }

    /// Fetch the authenticated user's profile.
    pub async fn current(&self) -> Result<UserProfile, ClientError> {
        self.api
            .get("fetching user profile", "/users/me/", Auth::Required)
            .await
    }

    /// Partial profile update; absent fields are left untouched server-side.
    pub async fn update(&self, changes: &UserUpdate) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .put("updating user profile", "/users/me/", changes, Auth::Required)
            .await?;
        Ok(())
    }

    /// Delete the authenticated account. The caller should clear the token
    /// store afterwards; the server-side session is gone either way.
    pub async fn delete(&self) -> Result<(), ClientError> {
        let _: MessageResponse = self
            .api
            .delete("deleting user", "/users/me/", Auth::Required)
            .await?;
        Ok(())
    }
}
