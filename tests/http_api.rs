//! Integration tests for the REST API.
//!
//! The full router runs over the in-memory adapter, so every request goes
//! through routing, extraction, the application handlers and error mapping.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use review_roster::adapters::http::{build_router, AppState};
use review_roster::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    build_router(AppState::in_memory(), &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn member(id: &str, name: &str, active: bool) -> Value {
    json!({ "user_id": id, "username": name, "is_active": active })
}

/// Team "backend" with u1 (author), u2, u3, u4 active and u5 inactive.
async fn seed_backend(app: &Router) {
    let (status, _) = post(
        app,
        "/team/add",
        json!({
            "team_name": "backend",
            "members": [
                member("u1", "Alice", true),
                member("u2", "Bob", true),
                member("u3", "Carol", true),
                member("u4", "Dave", true),
                member("u5", "Eve", false),
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn open_pr(app: &Router, id: &str, author: &str) -> Value {
    let (status, body) = post(
        app,
        "/pullRequest/create",
        json!({ "pull_request_id": id, "pull_request_name": "Add search", "author_id": author }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

fn assert_error(body: &Value, code: &str) {
    assert_eq!(body["error"]["code"], code, "{body}");
    assert!(body["error"]["message"].is_string(), "{body}");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

// =============================================================================
// Teams
// =============================================================================

#[tokio::test]
async fn add_team_returns_created_team() {
    let app = app();
    let (status, body) = post(
        &app,
        "/team/add",
        json!({ "team_name": "payments", "members": [member("p1", "Pat", true)] }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "team": { "team_name": "payments", "members": [member("p1", "Pat", true)] } })
    );
}

#[tokio::test]
async fn add_team_twice_is_team_exists() {
    let app = app();
    seed_backend(&app).await;

    let (status, body) = post(&app, "/team/add", json!({ "team_name": "backend", "members": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "TEAM_EXISTS");
}

#[tokio::test]
async fn add_team_moves_existing_user() {
    let app = app();
    seed_backend(&app).await;

    let (status, _) = post(
        &app,
        "/team/add",
        json!({ "team_name": "frontend", "members": [member("u2", "Bobby", false)] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/users/get?user_id=u2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"],
        json!({ "user_id": "u2", "username": "Bobby", "team_name": "frontend", "is_active": false })
    );

    let (_, team) = get(&app, "/team/get?team_name=backend").await;
    let ids: Vec<&str> = team["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["user_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["u1", "u3", "u4", "u5"]);
}

#[tokio::test]
async fn get_team_returns_members() {
    let app = app();
    seed_backend(&app).await;

    let (status, body) = get(&app, "/team/get?team_name=backend").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["team_name"], "backend");
    assert_eq!(body["members"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn get_unknown_team_is_not_found() {
    let (status, body) = get(&app(), "/team/get?team_name=ghosts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn get_team_without_param_is_bad_request() {
    let (status, body) = get(&app(), "/team/get").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
    assert_eq!(body["error"]["message"], "team_name parameter is required");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/team/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn set_is_active_returns_updated_user() {
    let app = app();
    seed_backend(&app).await;

    let (status, body) = post(&app, "/users/setIsActive", json!({ "user_id": "u3", "is_active": false })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"],
        json!({ "user_id": "u3", "username": "Carol", "team_name": "backend", "is_active": false })
    );
}

#[tokio::test]
async fn set_is_active_unknown_user_is_not_found() {
    let (status, body) = post(&app(), "/users/setIsActive", json!({ "user_id": "nobody", "is_active": true })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn get_review_lists_assigned_pull_requests() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, body) = get(&app, "/users/getReview?user_id=u2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "user_id": "u2",
            "pull_requests": [{
                "pull_request_id": "pr-1",
                "pull_request_name": "Add search",
                "author_id": "u1",
                "status": "OPEN"
            }]
        })
    );
}

#[tokio::test]
async fn get_review_for_idle_user_is_empty() {
    let app = app();
    seed_backend(&app).await;

    let (status, body) = get(&app, "/users/getReview?user_id=u4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pull_requests"], json!([]));
}

#[tokio::test]
async fn get_review_without_param_is_bad_request() {
    let (status, body) = get(&app(), "/users/getReview").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "user_id parameter is required");
}

// =============================================================================
// Pull requests
// =============================================================================

#[tokio::test]
async fn create_assigns_two_lowest_active_teammates() {
    let app = app();
    seed_backend(&app).await;

    let body = open_pr(&app, "pr-1", "u1").await;

    assert_eq!(body["pr"]["status"], "OPEN");
    assert_eq!(body["pr"]["author_id"], "u1");
    assert_eq!(body["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
    assert!(body["pr"]["createdAt"].is_string());
    assert!(body["pr"].get("mergedAt").is_none());
}

#[tokio::test]
async fn create_with_no_teammates_has_no_reviewers() {
    let app = app();
    post(&app, "/team/add", json!({ "team_name": "solo", "members": [member("s1", "Sam", true)] })).await;

    let body = open_pr(&app, "pr-solo", "s1").await;

    assert_eq!(body["pr"]["assigned_reviewers"], json!([]));
}

#[tokio::test]
async fn create_duplicate_is_pr_exists() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, body) = post(
        &app,
        "/pullRequest/create",
        json!({ "pull_request_id": "pr-1", "pull_request_name": "Again", "author_id": "u2" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, "PR_EXISTS");

    let (_, stored) = get(&app, "/pullRequest/get?pull_request_id=pr-1").await;
    assert_eq!(stored["pr"]["pull_request_name"], "Add search");
    assert_eq!(stored["pr"]["author_id"], "u1");
    assert_eq!(stored["pr"]["status"], "OPEN");
    assert_eq!(stored["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
}

#[tokio::test]
async fn create_with_unknown_author_is_not_found() {
    let (status, body) = post(
        &app(),
        "/pullRequest/create",
        json!({ "pull_request_id": "pr-x", "pull_request_name": "Orphan", "author_id": "ghost" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn create_with_empty_id_is_bad_request() {
    let (status, body) = post(
        &app(),
        "/pullRequest/create",
        json!({ "pull_request_id": "", "pull_request_name": "Blank", "author_id": "u1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "BAD_REQUEST");
}

#[tokio::test]
async fn merge_is_idempotent() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, first) = post(&app, "/pullRequest/merge", json!({ "pull_request_id": "pr-1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["pr"]["status"], "MERGED");
    assert_eq!(first["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
    assert!(first["pr"]["mergedAt"].is_string());

    let (status, second) = post(&app, "/pullRequest/merge", json!({ "pull_request_id": "pr-1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["pr"]["mergedAt"], first["pr"]["mergedAt"]);
}

#[tokio::test]
async fn merge_unknown_is_not_found() {
    let (status, body) = post(&app(), "/pullRequest/merge", json!({ "pull_request_id": "nope" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&body, "NOT_FOUND");
}

#[tokio::test]
async fn reassign_appends_replacement() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, body) = post(
        &app,
        "/pullRequest/reassign",
        json!({ "pull_request_id": "pr-1", "old_user_id": "u2" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["replaced_by"], "u4");
    assert_eq!(body["pr"]["assigned_reviewers"], json!(["u3", "u4"]));

    let (_, old) = get(&app, "/users/getReview?user_id=u2").await;
    assert_eq!(old["pull_requests"], json!([]));
}

#[tokio::test]
async fn reassign_without_candidates_is_no_candidate() {
    let app = app();
    post(
        &app,
        "/team/add",
        json!({
            "team_name": "trio",
            "members": [member("t1", "A", true), member("t2", "B", true), member("t3", "C", true)]
        }),
    )
    .await;
    open_pr(&app, "pr-t", "t1").await;

    let (status, body) = post(
        &app,
        "/pullRequest/reassign",
        json!({ "pull_request_id": "pr-t", "old_user_id": "t2" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, "NO_CANDIDATE");

    let (_, pr) = get(&app, "/pullRequest/get?pull_request_id=pr-t").await;
    assert_eq!(pr["pr"]["assigned_reviewers"], json!(["t2", "t3"]));
}

#[tokio::test]
async fn reassign_non_reviewer_is_not_assigned() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, body) = post(
        &app,
        "/pullRequest/reassign",
        json!({ "pull_request_id": "pr-1", "old_user_id": "u4" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, "NOT_ASSIGNED");

    let (_, stored) = get(&app, "/pullRequest/get?pull_request_id=pr-1").await;
    assert_eq!(stored["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
    let (_, idle) = get(&app, "/users/getReview?user_id=u4").await;
    assert_eq!(idle["pull_requests"], json!([]));
}

#[tokio::test]
async fn reassign_after_merge_is_pr_merged() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;
    post(&app, "/pullRequest/merge", json!({ "pull_request_id": "pr-1" })).await;

    let (status, body) = post(
        &app,
        "/pullRequest/reassign",
        json!({ "pull_request_id": "pr-1", "old_user_id": "u2" }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_error(&body, "PR_MERGED");

    let (_, stored) = get(&app, "/pullRequest/get?pull_request_id=pr-1").await;
    assert_eq!(stored["pr"]["status"], "MERGED");
    assert_eq!(stored["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
}

#[tokio::test]
async fn inactive_users_are_never_assigned() {
    let app = app();
    seed_backend(&app).await;
    post(&app, "/users/setIsActive", json!({ "user_id": "u2", "is_active": false })).await;

    let body = open_pr(&app, "pr-1", "u1").await;

    assert_eq!(body["pr"]["assigned_reviewers"], json!(["u3", "u4"]));
}

#[tokio::test]
async fn get_pull_request_returns_current_state() {
    let app = app();
    seed_backend(&app).await;
    open_pr(&app, "pr-1", "u1").await;

    let (status, body) = get(&app, "/pullRequest/get?pull_request_id=pr-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pr"]["pull_request_id"], "pr-1");
    assert_eq!(body["pr"]["assigned_reviewers"], json!(["u2", "u3"]));
}

#[tokio::test]
async fn get_pull_request_without_param_is_bad_request() {
    let (status, body) = get(&app(), "/pullRequest/get").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "pull_request_id parameter is required");
}
