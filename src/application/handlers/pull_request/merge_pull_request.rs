//! MergePullRequestHandler - Command handler for merging pull requests.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PullRequestId};
use crate::domain::pull_request::PullRequest;
use crate::ports::PullRequestRepository;

#[derive(Debug, Clone)]
pub struct MergePullRequestCommand {
    pub pull_request_id: String,
}

/// Handler for merges. Safe to retry: a second merge is a no-op.
pub struct MergePullRequestHandler {
    pull_requests: Arc<dyn PullRequestRepository>,
}

impl MergePullRequestHandler {
    pub fn new(pull_requests: Arc<dyn PullRequestRepository>) -> Self {
        Self { pull_requests }
    }

    pub async fn handle(&self, cmd: MergePullRequestCommand) -> Result<PullRequest, DomainError> {
        let id = PullRequestId::new(cmd.pull_request_id)?;
        self.pull_requests.merge(&id).await
    }
}
