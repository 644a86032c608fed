//! GetPullRequestHandler - Query handler for a single pull request.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PullRequestId};
use crate::domain::pull_request::PullRequest;
use crate::ports::PullRequestRepository;

#[derive(Debug, Clone)]
pub struct GetPullRequestQuery {
    pub pull_request_id: String,
}

pub struct GetPullRequestHandler {
    pull_requests: Arc<dyn PullRequestRepository>,
}

impl GetPullRequestHandler {
    pub fn new(pull_requests: Arc<dyn PullRequestRepository>) -> Self {
        Self { pull_requests }
    }

    pub async fn handle(&self, query: GetPullRequestQuery) -> Result<PullRequest, DomainError> {
        let id = PullRequestId::new(query.pull_request_id)?;
        self.pull_requests.find_by_id(&id).await
    }
}
