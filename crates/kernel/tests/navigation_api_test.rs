//! Integration tests for the navigation and access endpoints.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{TestApp, json_body};

use depot_kernel::menu::NavigationSection;
use depot_test_utils::{item_names, loader, test_user, two_section_tree, warehouse_manager};

#[tokio::test]
async fn health_reports_healthy() {
    let app = TestApp::new(Vec::new());
    let response = app.get("/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "healthy"}));
}

#[tokio::test]
async fn anonymous_navigation_is_empty() {
    let app = TestApp::new(vec![("mgr", warehouse_manager())]);

    let response = app.get("/api/navigation", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));

    let response = app.get("/api/navigation", Some("unknown-token")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn manager_sees_whole_tree() {
    let app = TestApp::new(vec![("mgr", warehouse_manager())]);

    let response = app.get("/api/navigation", Some("mgr")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let sections: Vec<NavigationSection> =
        serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(sections, app.state.navigation().tree());
}

#[tokio::test]
async fn loader_sees_only_tasks() {
    let app = TestApp::new(vec![("ld", loader())]);

    let response = app.get("/api/navigation", Some("ld")).await;
    let sections: Vec<NavigationSection> =
        serde_json::from_value(json_body(response).await).unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Operations");
    assert_eq!(item_names(&sections), vec![vec!["Tasks", "Task History"]]);
}

#[tokio::test]
async fn posted_snapshot_is_filtered() {
    let app = TestApp::with_tree(two_section_tree(), Vec::new());
    let user = test_user("clerk").reader("/shelf").reader("/load").build();

    let response = app
        .post_json("/api/navigation", serde_json::to_string(&user).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let sections: Vec<NavigationSection> =
        serde_json::from_value(json_body(response).await).unwrap();
    assert_eq!(item_names(&sections), vec![vec!["Shelves"], vec!["Tasks"]]);
}

#[tokio::test]
async fn posted_null_is_anonymous() {
    let app = TestApp::new(Vec::new());

    let response = app.post_json("/api/navigation", "null".to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn malformed_snapshot_is_bad_request() {
    let app = TestApp::new(Vec::new());

    let response = app
        .post_json("/api/navigation", r#"{"permissions": 5}"#.to_string())
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn access_summary_for_token() {
    let entry_clerk = test_user("entry").writers(&["/supplier", "/product"]).build();
    let app = TestApp::new(vec![("ec", entry_clerk), ("mgr", warehouse_manager())]);

    let response = app.get("/api/access", Some("ec")).await;
    assert_eq!(
        json_body(response).await,
        json!({"entry": true, "transaction": false, "tasks": false, "task_history": false})
    );

    let response = app.get("/api/access", Some("mgr")).await;
    assert_eq!(
        json_body(response).await,
        json!({"entry": true, "transaction": true, "tasks": true, "task_history": true})
    );

    let response = app.get("/api/access", None).await;
    assert_eq!(
        json_body(response).await,
        json!({"entry": false, "transaction": false, "tasks": false, "task_history": false})
    );
}

#[tokio::test]
async fn access_summary_for_snapshot() {
    let app = TestApp::new(Vec::new());
    let user = loader();

    let response = app
        .post_json("/api/access", serde_json::to_string(&user).unwrap())
        .await;
    assert_eq!(
        json_body(response).await,
        json!({"entry": false, "transaction": false, "tasks": true, "task_history": true})
    );
}

#[tokio::test]
async fn repeated_requests_share_cached_tree() {
    let app = TestApp::new(vec![("ld", loader())]);

    let first = json_body(app.get("/api/navigation", Some("ld")).await).await;
    let second = json_body(app.get("/api/navigation", Some("ld")).await).await;

    assert_eq!(first, second);
    assert_eq!(app.state.navigation().entry_count(), 1);
}
