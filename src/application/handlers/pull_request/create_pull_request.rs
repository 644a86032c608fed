//! CreatePullRequestHandler - Command handler for opening pull requests.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PullRequestId, UserId};
use crate::domain::pull_request::{NewPullRequest, PullRequest};
use crate::ports::PullRequestRepository;

/// Command to open a pull request.
#[derive(Debug, Clone)]
pub struct CreatePullRequestCommand {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

/// Handler for opening pull requests.
///
/// Reviewer assignment happens atomically inside the repository; the
/// handler only validates identifiers.
pub struct CreatePullRequestHandler {
    pull_requests: Arc<dyn PullRequestRepository>,
}

impl CreatePullRequestHandler {
    pub fn new(pull_requests: Arc<dyn PullRequestRepository>) -> Self {
        Self { pull_requests }
    }

    pub async fn handle(&self, cmd: CreatePullRequestCommand) -> Result<PullRequest, DomainError> {
        let new = NewPullRequest {
            id: PullRequestId::new(cmd.pull_request_id)?,
            name: cmd.pull_request_name,
            author_id: UserId::new(cmd.author_id)?,
        };
        self.pull_requests.create(&new).await
    }
}
