//! Memoized navigation filtering.
//!
//! Filtered trees are keyed by user id plus a fingerprint of the user's
//! permission set, so a permission change yields a new key and never a
//! stale tree.

use std::sync::Arc;

use moka::sync::Cache;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::User;

use super::filter::filter_navigation;
use super::tree::NavigationSection;

/// Default maximum number of cached filtered trees.
pub const DEFAULT_CAPACITY: u64 = 1_000;

/// Navigation tree with per-user memoization of its filtered form.
///
/// Clone is cheap; clones share the tree and the cache.
#[derive(Clone)]
pub struct NavigationCache {
    tree: Arc<Vec<NavigationSection>>,
    filtered: Cache<String, Arc<Vec<NavigationSection>>>,
}

impl NavigationCache {
    /// Create a cache over `tree` holding at most `capacity` entries.
    pub fn new(tree: Vec<NavigationSection>, capacity: u64) -> Self {
        Self {
            tree: Arc::new(tree),
            filtered: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// The unfiltered tree.
    pub fn tree(&self) -> &[NavigationSection] {
        &self.tree
    }

    /// Tree visible to `user`, computed at most once per permission
    /// snapshot.
    pub fn filtered(&self, user: Option<&User>) -> Arc<Vec<NavigationSection>> {
        let Some(user) = user else {
            return Arc::new(Vec::new());
        };

        let key = snapshot_key(user);
        self.filtered.get_with(key, || {
            debug!(user_id = %user.id, "computing filtered navigation");
            Arc::new(filter_navigation(&self.tree, Some(user)))
        })
    }

    /// Drop every cached tree.
    pub fn invalidate_all(&self) {
        self.filtered.invalidate_all();
    }

    /// Number of cached trees (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.filtered.run_pending_tasks();
        self.filtered.entry_count()
    }
}

/// Cache key for a user snapshot.
///
/// Permission order and duplicates do not affect the key.
fn snapshot_key(user: &User) -> String {
    let mut grants: Vec<(&str, bool)> = user
        .permissions
        .iter()
        .map(|p| (p.route.as_str(), p.writer))
        .collect();
    grants.sort_unstable();
    grants.dedup();

    let mut hasher = Sha256::new();
    for (route, writer) in grants {
        hasher.update(route.as_bytes());
        hasher.update([0, u8::from(writer)]);
    }

    format!("{}:{}", user.id, hex::encode(hasher.finalize()))
}
