//! End-to-end tests for the REST API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use taskdeck_core::Store;
use taskdeck_web::{create_router, state::AppState};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(Arc::new(Store::new())))
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_project(app: &Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/projects", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_task(app: &Router, project_id: &str, title: &str, task_type: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": title, "task_type": task_type })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_and_get_project() {
    let app = app();

    let (status, body) = send(&app, "POST", "/projects", Some(json!({ "name": "Launch" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Launch");
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, "GET", &format!("/projects/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_project_with_blank_name_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, "POST", "/projects", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn test_get_unknown_project_is_not_found() {
    let app = app();
    let (status, body) = send(&app, "GET", "/projects/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_list_projects_in_creation_order() {
    let app = app();
    create_project(&app, "First").await;
    create_project(&app, "Second").await;

    let (status, body) = send(&app, "GET", "/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_create_task_starts_open() {
    let app = app();
    let project_id = create_project(&app, "Launch").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": "Write spec", "task_type": "doc" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "open");
    assert_eq!(body["title"], "Write spec");
    assert_eq!(body["task_type"], "doc");
    assert_eq!(body["project_id"], project_id.as_str());
    assert_eq!(body["due_date"], Value::Null);
}

#[tokio::test]
async fn test_create_task_under_unknown_project_is_not_found() {
    let app = app();
    // Not-found wins even when the payload is otherwise invalid.
    let (status, body) = send(
        &app,
        "POST",
        "/projects/missing/tasks",
        Some(json!({ "title": "", "task_type": "nonsense" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_create_task_with_unknown_type_is_bad_request() {
    let app = app();
    let project_id = create_project(&app, "Launch").await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": "Ship it", "task_type": "epic" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn test_list_tasks_is_scoped_to_project() {
    let app = app();
    let first = create_project(&app, "First").await;
    let second = create_project(&app, "Second").await;
    create_task(&app, &first, "A", "feature").await;
    create_task(&app, &second, "Elsewhere", "chore").await;
    create_task(&app, &first, "B", "bug").await;

    let (status, body) = send(&app, "GET", &format!("/projects/{first}/tasks"), None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["A", "B"]);

    let (status, _) = send(&app, "GET", "/projects/missing/tasks", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_status_transitions_over_http() {
    let app = app();
    let project_id = create_project(&app, "Launch").await;
    let task_id = create_task(&app, &project_id, "Write spec", "doc").await;

    // Skipping straight to done is rejected.
    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "status": "done" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid status transition");
    assert!(body["details"].as_str().unwrap().contains("open"));
    assert!(body["details"].as_str().unwrap().contains("done"));

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "status": "in_progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "in_progress");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "status": "done" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "done");

    // Done is terminal.
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "status": "open" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_keeps_unset_fields() {
    let app = app();
    let project_id = create_project(&app, "Launch").await;
    let (_, created) = send(
        &app,
        "POST",
        &format!("/projects/{project_id}/tasks"),
        Some(json!({ "title": "Write spec", "task_type": "doc", "due_date": "2026-09-01" })),
    )
    .await;
    let task_id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/tasks/{task_id}"),
        Some(json!({ "title": "Write the spec" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Write the spec");
    assert_eq!(body["due_date"], "2026-09-01");
    assert_eq!(body["status"], "open");
}

#[tokio::test]
async fn test_delete_task_twice() {
    let app = app();
    let project_id = create_project(&app, "Launch").await;
    let task_id = create_task(&app, &project_id, "Write spec", "doc").await;

    let (status, body) = send(&app, "DELETE", &format!("/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "DELETE", &format!("/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/tasks/{task_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
