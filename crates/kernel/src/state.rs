//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::auth::{HttpUserProvider, UserProvider};
use crate::config::Config;
use crate::menu::{NavigationCache, NavigationSection, default_navigation, load_navigation};

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Navigation tree and its per-user filtered forms.
    navigation: NavigationCache,

    /// Resolves bearer tokens into user snapshots.
    users: Arc<dyn UserProvider>,
}

impl AppState {
    /// Build state from configuration, talking to the configured API.
    pub fn new(config: &Config) -> Result<Self> {
        let tree = match &config.navigation_file {
            Some(path) => load_navigation(path)?,
            None => default_navigation(),
        };

        let provider = HttpUserProvider::new(&config.api_base_url, config.auth_timeout)
            .context("failed to create authentication client")?;
        info!(endpoint = %provider.endpoint(), "authentication service configured");

        Ok(Self::with_provider(tree, config.nav_cache_capacity, Arc::new(provider)))
    }

    /// Build state around an explicit tree and user provider.
    pub fn with_provider(
        tree: Vec<NavigationSection>,
        cache_capacity: u64,
        users: Arc<dyn UserProvider>,
    ) -> Self {
        info!(
            sections = tree.len(),
            items = tree.iter().map(|s| s.items.len()).sum::<usize>(),
            "navigation tree ready"
        );

        Self {
            inner: Arc::new(AppStateInner {
                navigation: NavigationCache::new(tree, cache_capacity),
                users,
            }),
        }
    }

    /// Navigation tree and filter cache.
    pub fn navigation(&self) -> &NavigationCache {
        &self.inner.navigation
    }

    /// User provider.
    pub fn users(&self) -> &Arc<dyn UserProvider> {
        &self.inner.users
    }
}
