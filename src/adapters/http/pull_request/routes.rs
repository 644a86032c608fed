//! Axum router configuration for pull request endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{create_pull_request, get_pull_request, merge_pull_request, reassign_reviewer};

/// Pull request routes, mounted under `/pullRequest`.
///
/// - `POST /create` - Open a pull request with auto-assigned reviewers
/// - `POST /merge` - Merge (safe to retry)
/// - `POST /reassign` - Replace one reviewer
/// - `GET /get?pull_request_id=` - Read a pull request
pub fn pull_request_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_pull_request))
        .route("/merge", post(merge_pull_request))
        .route("/reassign", post(reassign_reviewer))
        .route("/get", get(get_pull_request))
}
