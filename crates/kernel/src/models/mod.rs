//! Data models shared across the access layer.

pub mod user;

pub use user::{RoutePermission, User, read_user_file};
