//! GetReviewHandler - Query handler for the pull requests a user reviews.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::pull_request::PullRequestSummary;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetReviewQuery {
    pub user_id: String,
}

/// Review listing for one user.
#[derive(Debug, Clone)]
pub struct GetReviewResult {
    pub user_id: UserId,
    pub pull_requests: Vec<PullRequestSummary>,
}

pub struct GetReviewHandler {
    users: Arc<dyn UserRepository>,
}

impl GetReviewHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetReviewQuery) -> Result<GetReviewResult, DomainError> {
        let user_id = UserId::new(query.user_id)?;
        let pull_requests = self.users.find_reviews(&user_id).await?;
        Ok(GetReviewResult {
            user_id,
            pull_requests,
        })
    }
}
