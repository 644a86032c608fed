//! HTTP handlers for pull request endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{require_param, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::{
    CreatePullRequestCommand, GetPullRequestQuery, MergePullRequestCommand,
    ReassignReviewerCommand,
};

use super::dto::{
    CreatePullRequestRequest, MergePullRequestRequest, PullRequestDto, PullRequestIdParams,
    PullRequestResponse, ReassignRequest, ReassignResponse,
};

/// POST /pullRequest/create - Open a pull request and assign reviewers
pub async fn create_pull_request(
    State(state): State<AppState>,
    body: Result<Json<CreatePullRequestRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = CreatePullRequestCommand {
        pull_request_id: request.pull_request_id,
        pull_request_name: request.pull_request_name,
        author_id: request.author_id,
    };

    let pr = state.create_pull_request_handler().handle(cmd).await?;
    let response = PullRequestResponse {
        pr: PullRequestDto::from(pr),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /pullRequest/merge - Merge a pull request (idempotent)
pub async fn merge_pull_request(
    State(state): State<AppState>,
    body: Result<Json<MergePullRequestRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = MergePullRequestCommand {
        pull_request_id: request.pull_request_id,
    };

    let pr = state.merge_pull_request_handler().handle(cmd).await?;
    Ok(Json(PullRequestResponse {
        pr: PullRequestDto::from(pr),
    }))
}

/// POST /pullRequest/reassign - Replace one reviewer
pub async fn reassign_reviewer(
    State(state): State<AppState>,
    body: Result<Json<ReassignRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = ReassignReviewerCommand {
        pull_request_id: request.pull_request_id,
        old_user_id: request.old_user_id,
    };

    let outcome = state.reassign_reviewer_handler().handle(cmd).await?;
    Ok(Json(ReassignResponse::from(outcome)))
}

/// GET /pullRequest/get?pull_request_id= - Read a pull request
pub async fn get_pull_request(
    State(state): State<AppState>,
    params: Result<Query<PullRequestIdParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = GetPullRequestQuery {
        pull_request_id: require_param(params.pull_request_id, "pull_request_id")?,
    };

    let pr = state.get_pull_request_handler().handle(query).await?;
    Ok(Json(PullRequestResponse {
        pr: PullRequestDto::from(pr),
    }))
}
