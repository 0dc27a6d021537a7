//! Resolution of the current user from the authentication service.
//!
//! A missing or rejected token resolves to `None`, which every access
//! check treats as deny. Only failures to reach the service are errors.

mod http;

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::User;

pub use http::HttpUserProvider;

/// Errors resolving a user snapshot.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication service returned status {0}")]
    Status(u16),

    #[error("invalid authentication service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Source of authenticated user snapshots.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Resolve the user owning `token`, or `None` for anonymous requests.
    async fn current_user(&self, token: Option<&str>) -> Result<Option<User>, AuthError>;
}

/// Fixed token-to-user table, for local development and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticUserProvider {
    users: HashMap<String, User>,
}

impl StaticUserProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user` under `token`.
    pub fn with_user(mut self, token: impl Into<String>, user: User) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl UserProvider for StaticUserProvider {
    async fn current_user(&self, token: Option<&str>) -> Result<Option<User>, AuthError> {
        Ok(token.and_then(|t| self.users.get(t)).cloned())
    }
}
