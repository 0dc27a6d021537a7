//! Navigation tree definition.
//!
//! The built-in tree mirrors the console's sidebar. Deployments can
//! replace it with a YAML file of the same shape:
//!
//! ```yaml
//! - title: Inventory
//!   items:
//!     - name: Products
//!       href: /products
//!       route: /product
//!       icon: package
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::Feature;

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display label, unique across the tree.
    pub name: String,
    /// Link target in the console.
    pub href: String,
    /// Permission pattern checked for untagged items.
    pub route: String,
    /// Icon identifier, opaque to this crate.
    #[serde(default)]
    pub icon: String,
    /// Composite feature gating this item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
    /// Require writer rights on `route` instead of any grant.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub writer: bool,
}

impl NavigationItem {
    /// Item checked against a single route.
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        route: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            route: route.into(),
            icon: icon.into(),
            feature: None,
            writer: false,
        }
    }

    /// Gate this item on a composite feature.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.feature = Some(feature);
        self
    }

    /// Require writer rights on the item's route.
    pub fn write_gated(mut self) -> Self {
        self.writer = true;
        self
    }

    /// Feature governing this item: the explicit tag, or one inferred from
    /// the display label.
    pub fn resolved_feature(&self) -> Option<Feature> {
        self.feature.or_else(|| Feature::from_label(&self.name))
    }
}

/// A titled group of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

impl NavigationSection {
    pub fn new(title: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// The console's built-in navigation tree.
pub fn default_navigation() -> Vec<NavigationSection> {
    vec![
        NavigationSection::new(
            "Overview",
            vec![NavigationItem::new("Dashboard", "/", "/dashboard", "home")],
        ),
        NavigationSection::new(
            "Inventory",
            vec![
                NavigationItem::new("Products", "/products", "/product", "package"),
                NavigationItem::new(
                    "Product Locations",
                    "/product-locations",
                    "/product/location",
                    "map-pin",
                ),
                NavigationItem::new("Suppliers", "/suppliers", "/supplier", "truck"),
                NavigationItem::new("Racks", "/racks", "/rack", "server"),
                NavigationItem::new("Shelves", "/shelves", "/shelf", "layers"),
            ],
        ),
        NavigationSection::new(
            "Operations",
            vec![
                NavigationItem::new("Entry", "/entry", "/supplier", "log-in")
                    .with_feature(Feature::Entry),
                NavigationItem::new("Transaction", "/transaction", "/transaction", "repeat")
                    .with_feature(Feature::Transaction),
                NavigationItem::new("Tasks", "/tasks", "/load", "clipboard-list")
                    .with_feature(Feature::Tasks),
                NavigationItem::new("Task History", "/tasks/history", "/load/status", "history")
                    .with_feature(Feature::TaskHistory),
            ],
        ),
        NavigationSection::new(
            "Administration",
            vec![NavigationItem::new("Users", "/users", "/user", "users")],
        ),
    ]
}

/// Parse and validate a YAML navigation tree.
pub fn parse_navigation(yaml: &str) -> Result<Vec<NavigationSection>> {
    let sections: Vec<NavigationSection> =
        serde_yml::from_str(yaml).context("failed to parse navigation YAML")?;
    validate(&sections)?;
    Ok(sections)
}

/// Load a navigation tree from a YAML file.
pub fn load_navigation(path: &Path) -> Result<Vec<NavigationSection>> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read navigation file {}", path.display()))?;
    let sections = parse_navigation(&yaml)
        .with_context(|| format!("invalid navigation file {}", path.display()))?;

    debug!(
        path = %path.display(),
        sections = sections.len(),
        "loaded navigation tree"
    );

    Ok(sections)
}

fn validate(sections: &[NavigationSection]) -> Result<()> {
    let mut names = HashSet::new();

    for section in sections {
        if section.title.trim().is_empty() {
            bail!("navigation section title must not be empty");
        }
        for item in &section.items {
            if !names.insert(item.name.as_str()) {
                bail!("duplicate navigation item name: {}", item.name);
            }
            if !item.href.starts_with('/') {
                bail!("navigation item {} has relative href {}", item.name, item.href);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn default_tree_is_valid() {
        let tree = default_navigation();
        validate(&tree).unwrap();
        assert!(tree.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn default_tree_tags_composite_features() {
        let tree = default_navigation();
        let tagged: Vec<_> = tree
            .iter()
            .flat_map(|s| &s.items)
            .filter_map(|i| i.feature)
            .collect();
        assert_eq!(tagged, Feature::ALL.to_vec());
    }

    #[test]
    fn parse_yaml_tree() {
        let yaml = r#"
- title: Inventory
  items:
    - name: Products
      href: /products
      route: /product
      icon: package
    - name: Restock
      href: /restock
      route: /product
      writer: true
- title: Operations
  items:
    - name: Loads
      href: /loads
      route: /load
      feature: tasks
"#;

        let tree = parse_navigation(yaml).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].items[1].icon, "");
        assert!(tree[0].items[1].writer);
        assert_eq!(tree[1].items[0].feature, Some(Feature::Tasks));
    }

    #[test]
    fn resolved_feature_falls_back_to_label() {
        let item = NavigationItem::new("Task History", "/history", "/load/status", "history");
        assert_eq!(item.resolved_feature(), Some(Feature::TaskHistory));

        let tagged =
            NavigationItem::new("Loads", "/loads", "/load", "box").with_feature(Feature::Tasks);
        assert_eq!(tagged.resolved_feature(), Some(Feature::Tasks));

        let plain = NavigationItem::new("Racks", "/racks", "/rack", "server");
        assert_eq!(plain.resolved_feature(), None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = r#"
- title: A
  items:
    - { name: Racks, href: /racks, route: /rack }
- title: B
  items:
    - { name: Racks, href: /racks2, route: /rack }
"#;
        let err = parse_navigation(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn rejects_relative_href() {
        let yaml = r#"
- title: A
  items:
    - { name: Racks, href: racks, route: /rack }
"#;
        assert!(parse_navigation(yaml).is_err());
    }

    #[test]
    fn rejects_blank_title() {
        let yaml = r#"
- title: "  "
  items: []
"#;
        assert!(parse_navigation(yaml).is_err());
    }
}
