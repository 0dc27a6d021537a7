//! Navigation menu for the warehouse console.
//!
//! The menu is a static tree of sections and items. Before it reaches the
//! sidebar it is pruned to what the current user may see:
//! - Tree definition and YAML loading (`tree`)
//! - Permission filtering (`filter`)
//! - Per-user memoization of filtered trees (`cache`)

mod cache;
mod filter;
mod tree;

pub use cache::{DEFAULT_CAPACITY, NavigationCache};
pub use filter::{filter_navigation, item_visible};
pub use tree::{
    NavigationItem, NavigationSection, default_navigation, load_navigation, parse_navigation,
};
