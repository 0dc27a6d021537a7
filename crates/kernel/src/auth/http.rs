//! User provider backed by the warehouse REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

use super::{AuthError, UserProvider};
use crate::models::User;

/// Path of the current-user endpoint, relative to the API base URL.
const CURRENT_USER_PATH: &str = "auth/me";

/// Fetches the current user from `GET {api_base_url}/auth/me`.
#[derive(Clone)]
pub struct HttpUserProvider {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpUserProvider {
    /// Create a provider for the API rooted at `api_base_url`.
    pub fn new(api_base_url: &str, timeout: Duration) -> Result<Self, AuthError> {
        let endpoint = current_user_url(api_base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self { client, endpoint })
    }

    /// Resolved current-user endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserProvider for HttpUserProvider {
    async fn current_user(&self, token: Option<&str>) -> Result<Option<User>, AuthError> {
        let Some(token) = token else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.endpoint.clone())
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!(status = %response.status(), "token rejected by authentication service");
                Ok(None)
            }
            status if status.is_success() => {
                let user: User = response.json().await?;
                debug!(user_id = %user.id, permissions = user.permissions.len(), "resolved user");
                Ok(Some(user))
            }
            status => {
                warn!(status = %status, "unexpected authentication service response");
                Err(AuthError::Status(status.as_u16()))
            }
        }
    }
}

/// Join the current-user path onto the API base, keeping the base's own
/// path segments.
fn current_user_url(api_base_url: &str) -> Result<Url, AuthError> {
    let mut base = Url::parse(api_base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(CURRENT_USER_PATH)?)
}
