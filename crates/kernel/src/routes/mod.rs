//! HTTP route handlers.

pub mod health;
pub mod helpers;
pub mod navigation;

use axum::Router;

use crate::state::AppState;

/// Assemble every route of the access API.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(navigation::router())
        .with_state(state)
}
