//! Request and response bodies for pull request endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::pull_request::{PullRequest, PullRequestStatus, Reassignment};

/// Body of `POST /pullRequest/create`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

/// Body of `POST /pullRequest/merge`.
#[derive(Debug, Clone, Deserialize)]
pub struct MergePullRequestRequest {
    pub pull_request_id: String,
}

/// Body of `POST /pullRequest/reassign`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReassignRequest {
    pub pull_request_id: String,
    pub old_user_id: String,
}

/// Full pull request view.
///
/// Timestamps use camelCase keys; `mergedAt` is omitted until merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestDto {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", default, skip_serializing_if = "Option::is_none")]
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<PullRequest> for PullRequestDto {
    fn from(pr: PullRequest) -> Self {
        Self {
            pull_request_id: pr.id.as_str().to_string(),
            pull_request_name: pr.name,
            author_id: pr.author_id.as_str().to_string(),
            status: pr.status,
            assigned_reviewers: pr
                .assigned_reviewers
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            created_at: *pr.created_at.as_datetime(),
            merged_at: pr.merged_at.map(|t| *t.as_datetime()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestResponse {
    pub pr: PullRequestDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignResponse {
    pub pr: PullRequestDto,
    pub replaced_by: String,
}

impl From<Reassignment> for ReassignResponse {
    fn from(outcome: Reassignment) -> Self {
        Self {
            replaced_by: outcome.replaced_by.as_str().to_string(),
            pr: PullRequestDto::from(outcome.pull_request),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestIdParams {
    pub pull_request_id: Option<String>,
}
