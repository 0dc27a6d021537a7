//! Access control for warehouse features.
//!
//! Permissions are granted per route pattern with a writer flag. This
//! module provides:
//! - Route pattern matching (`route`)
//! - Named feature predicates built from `(route, writer)` requirements
//!   (`predicates`)

pub mod predicates;
pub mod route;

pub use predicates::{
    AccessSummary, Feature, Requirement, can_access_entry, can_access_task_history,
    can_access_tasks, can_access_transaction, has_read_access, has_write_access,
};
pub use route::match_route;
