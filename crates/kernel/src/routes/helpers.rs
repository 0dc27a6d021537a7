//! Shared route helpers for resolving the requesting user.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::error::AppResult;
use crate::models::User;
use crate::state::AppState;

/// Extract the bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Resolve the requesting user, or `None` for anonymous requests.
pub async fn current_user(state: &AppState, headers: &HeaderMap) -> AppResult<Option<User>> {
    let user = state.users().current_user(bearer_token(headers)).await?;
    Ok(user)
}
