//! Permission filtering of the navigation tree.

use crate::access::{has_read_access, has_write_access};
use crate::models::User;

use super::tree::{NavigationItem, NavigationSection};

/// Check whether a single item is visible to `user`.
///
/// Items governed by a composite feature use that feature's predicate.
/// Everything else needs a grant on the item's route, with writer rights
/// when the item is write-gated.
pub fn item_visible(item: &NavigationItem, user: Option<&User>) -> bool {
    if let Some(feature) = item.resolved_feature() {
        return feature.allows(user);
    }

    if item.writer {
        has_write_access(user, &item.route)
    } else {
        has_read_access(user, &item.route)
    }
}

/// Prune `tree` to the sections and items `user` may see.
///
/// Hidden items are dropped, then sections left empty are dropped. The
/// relative order of what survives is preserved. With no user the result
/// is empty.
pub fn filter_navigation(
    tree: &[NavigationSection],
    user: Option<&User>,
) -> Vec<NavigationSection> {
    if user.is_none() {
        return Vec::new();
    }

    tree.iter()
        .filter_map(|section| {
            let items: Vec<NavigationItem> = section
                .items
                .iter()
                .filter(|item| item_visible(item, user))
                .cloned()
                .collect();

            (!items.is_empty()).then(|| NavigationSection {
                title: section.title.clone(),
                items,
            })
        })
        .collect()
}
