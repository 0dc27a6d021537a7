//! Navigation and feature-access endpoints.
//!
//! GET endpoints resolve the user from the bearer token; POST endpoints
//! take a user snapshot (or `null`) in the body, for shells that already
//! hold one.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use crate::access::AccessSummary;
use crate::error::{AppError, AppResult};
use crate::menu::NavigationSection;
use crate::models::User;
use crate::routes::helpers::current_user;
use crate::state::AppState;

/// Filtered navigation for the token's user.
async fn navigation_for_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Arc<Vec<NavigationSection>>>> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(filtered(&state, user.as_ref())))
}

/// Filtered navigation for a posted user snapshot.
async fn navigation_for_snapshot(
    State(state): State<AppState>,
    body: Result<Json<Option<User>>, JsonRejection>,
) -> AppResult<Json<Arc<Vec<NavigationSection>>>> {
    let Json(user) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(filtered(&state, user.as_ref())))
}

/// Feature flags for the token's user.
async fn access_for_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<AccessSummary>> {
    let user = current_user(&state, &headers).await?;
    Ok(Json(AccessSummary::for_user(user.as_ref())))
}

/// Feature flags for a posted user snapshot.
async fn access_for_snapshot(
    body: Result<Json<Option<User>>, JsonRejection>,
) -> AppResult<Json<AccessSummary>> {
    let Json(user) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(AccessSummary::for_user(user.as_ref())))
}

fn filtered(state: &AppState, user: Option<&User>) -> Arc<Vec<NavigationSection>> {
    let sections = state.navigation().filtered(user);
    debug!(
        user_id = ?user.map(|u| u.id),
        sections = sections.len(),
        "served navigation"
    );
    sections
}

/// Create the navigation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/navigation",
            get(navigation_for_token).post(navigation_for_snapshot),
        )
        .route("/api/access", get(access_for_token).post(access_for_snapshot))
}
