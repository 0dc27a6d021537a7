//! Depot Kernel Library
//!
//! Route permissions, feature predicates and navigation filtering for the
//! Depot warehouse console, plus the HTTP surface serving them. The `depot`
//! binary is the command-line entry point.

pub mod access;
pub mod auth;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
