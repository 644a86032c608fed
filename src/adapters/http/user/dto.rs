//! Request and response bodies for user endpoints.

use serde::{Deserialize, Serialize};

use crate::application::GetReviewResult;
use crate::domain::pull_request::{PullRequestStatus, PullRequestSummary};
use crate::domain::user::User;

/// Body of `POST /users/setIsActive`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetIsActiveRequest {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id.as_str().to_string(),
            username: user.username,
            team_name: user.team_name.as_str().to_string(),
            is_active: user.is_active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserDto,
}

/// Short form of a pull request in review listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequestShortDto {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PullRequestStatus,
}

impl From<PullRequestSummary> for PullRequestShortDto {
    fn from(summary: PullRequestSummary) -> Self {
        Self {
            pull_request_id: summary.id.as_str().to_string(),
            pull_request_name: summary.name,
            author_id: summary.author_id.as_str().to_string(),
            status: summary.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetReviewResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortDto>,
}

impl From<GetReviewResult> for GetReviewResponse {
    fn from(result: GetReviewResult) -> Self {
        Self {
            user_id: result.user_id.as_str().to_string(),
            pull_requests: result
                .pull_requests
                .into_iter()
                .map(PullRequestShortDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserIdParams {
    pub user_id: Option<String>,
}
