#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the real router over a fixed token table so requests exercise
//! the same handlers, cache and predicates the server runs.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use depot_kernel::auth::StaticUserProvider;
use depot_kernel::menu::{DEFAULT_CAPACITY, NavigationSection, default_navigation};
use depot_kernel::models::User;
use depot_kernel::{AppState, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over the built-in tree with the given `(token, user)` pairs.
    pub fn new(users: Vec<(&str, User)>) -> Self {
        Self::with_tree(default_navigation(), users)
    }

    /// App over an explicit tree.
    pub fn with_tree(tree: Vec<NavigationSection>, users: Vec<(&str, User)>) -> Self {
        let provider = users
            .into_iter()
            .fold(StaticUserProvider::new(), |p, (token, user)| p.with_user(token, user));
        let state = AppState::with_provider(tree, DEFAULT_CAPACITY, Arc::new(provider));
        let router = routes::router(state.clone());

        Self { router, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET `uri`, with a bearer token when given.
    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// POST a JSON body to `uri`.
    pub async fn post_json(&self, uri: &str, body: String) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }
}

/// Collect a response body as JSON.
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
