//! Authenticated user snapshot and its route permissions.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access::route::match_route;

/// A single permission grant on a route pattern.
///
/// `route` may cover a whole subtree (`/product` governs
/// `/product/location`). `writer` grants mutation rights; without it the
/// grant is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoutePermission {
    pub route: String,
    #[serde(default)]
    pub writer: bool,
}

impl RoutePermission {
    /// Read-only grant on `route`.
    pub fn reader(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            writer: false,
        }
    }

    /// Read-write grant on `route`.
    pub fn writer(route: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            writer: true,
        }
    }

    /// Whether this grant governs `route`, ignoring the writer flag.
    pub fn governs(&self, route: &str) -> bool {
        match_route(&self.route, route)
    }
}

/// User record as returned by the authentication service.
///
/// Treated as an immutable snapshot for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<RoutePermission>,
}

impl User {
    /// Create a user with no permissions.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions: Vec::new(),
        }
    }

    /// Check for any grant governing `route`.
    ///
    /// When `writer` is true only writer grants count; a read check is
    /// satisfied by either kind.
    pub fn has_permission(&self, route: &str, writer: bool) -> bool {
        self.permissions
            .iter()
            .any(|p| p.governs(route) && (p.writer || !writer))
    }
}

/// Read a user snapshot from a JSON file.
///
/// No path, or a file holding JSON `null`, is an anonymous user.
pub fn read_user_file(path: Option<&Path>) -> Result<Option<User>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read user file {}", path.display()))?;
    let user = serde_json::from_str(&json)
        .with_context(|| format!("invalid user file {}", path.display()))?;

    Ok(user)
}
