//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::auth::AuthError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("authentication service unavailable")]
    Upstream(#[from] AuthError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        // Never echo upstream details to the client
        let body = match &self {
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "authentication service error");
                self.to_string()
            }
            AppError::BadRequest(_) => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn bad_request_echoes_reason() {
        let response = AppError::BadRequest("missing field `id`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "bad request: missing field `id`");
    }

    #[tokio::test]
    async fn upstream_failure_hides_details() {
        let response = AppError::from(AuthError::Status(503)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = body_text(response).await;
        assert_eq!(body, "authentication service unavailable");
        assert!(!body.contains("503"));
    }
}
