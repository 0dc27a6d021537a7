//! Depot test utilities.
//!
//! Fixture builders for users and navigation trees shared by the kernel's
//! integration tests.

use depot_kernel::access::Feature;
use depot_kernel::menu::{NavigationItem, NavigationSection};
use depot_kernel::models::{RoutePermission, User};
use uuid::Uuid;

/// Start building a test user.
pub fn test_user(name: &str) -> TestUser {
    TestUser {
        id: Uuid::now_v7(),
        name: name.to_string(),
        permissions: Vec::new(),
    }
}

/// A test user builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<RoutePermission>,
}

impl TestUser {
    /// Set a custom ID.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Grant read-only access to `route`.
    pub fn reader(mut self, route: &str) -> Self {
        self.permissions.push(RoutePermission::reader(route));
        self
    }

    /// Grant read-write access to `route`.
    pub fn writer(mut self, route: &str) -> Self {
        self.permissions.push(RoutePermission::writer(route));
        self
    }

    /// Grant read-write access to every route in `routes`.
    pub fn writers(self, routes: &[&str]) -> Self {
        routes.iter().fold(self, |user, route| user.writer(route))
    }

    /// Build the user.
    pub fn build(self) -> User {
        User {
            id: self.id,
            name: self.name,
            permissions: self.permissions,
        }
    }
}

/// Writer on everything the console exposes.
pub fn warehouse_manager() -> User {
    test_user("manager")
        .writers(&[
            "/dashboard",
            "/product",
            "/supplier",
            "/rack",
            "/shelf",
            "/transaction",
            "/load",
            "/user",
        ])
        .build()
}

/// Reads loads and their status, nothing else.
pub fn loader() -> User {
    test_user("loader").reader("/load").build()
}

/// Two sections of two single-route items each.
pub fn two_section_tree() -> Vec<NavigationSection> {
    vec![
        NavigationSection::new(
            "Stock",
            vec![
                NavigationItem::new("Racks", "/racks", "/rack", "server"),
                NavigationItem::new("Shelves", "/shelves", "/shelf", "layers"),
            ],
        ),
        NavigationSection::new(
            "Operations",
            vec![
                NavigationItem::new("Entry", "/entry", "/supplier", "log-in")
                    .with_feature(Feature::Entry),
                NavigationItem::new("Tasks", "/tasks", "/load", "clipboard-list")
                    .with_feature(Feature::Tasks),
            ],
        ),
    ]
}

/// Item names per section, for compact assertions.
pub fn item_names(tree: &[NavigationSection]) -> Vec<Vec<String>> {
    tree.iter()
        .map(|s| s.items.iter().map(|i| i.name.clone()).collect())
        .collect()
}
