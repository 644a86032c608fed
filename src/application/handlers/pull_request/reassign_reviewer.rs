//! ReassignReviewerHandler - Command handler for replacing one reviewer.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, PullRequestId, UserId};
use crate::domain::pull_request::Reassignment;
use crate::ports::PullRequestRepository;

/// Command to replace `old_user_id` on a pull request.
#[derive(Debug, Clone)]
pub struct ReassignReviewerCommand {
    pub pull_request_id: String,
    pub old_user_id: String,
}

/// Handler for reviewer reassignment.
///
/// Not idempotent: a retried call replaces the new reviewer again.
pub struct ReassignReviewerHandler {
    pull_requests: Arc<dyn PullRequestRepository>,
}

impl ReassignReviewerHandler {
    pub fn new(pull_requests: Arc<dyn PullRequestRepository>) -> Self {
        Self { pull_requests }
    }

    pub async fn handle(&self, cmd: ReassignReviewerCommand) -> Result<Reassignment, DomainError> {
        let id = PullRequestId::new(cmd.pull_request_id)?;
        let old_reviewer = UserId::new(cmd.old_user_id)?;
        self.pull_requests.reassign(&id, &old_reviewer).await
    }
}
