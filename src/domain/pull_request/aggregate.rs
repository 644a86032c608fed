//! Pull request aggregate and its read models.

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, StateMachine, Timestamp, UserId,
};

use super::PullRequestStatus;

/// Input for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
}

/// A pull request with its reviewer assignments.
///
/// `assigned_reviewers` keeps assignment order: initial reviewers in
/// selection order, replacements appended at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
    pub assigned_reviewers: Vec<UserId>,
    pub created_at: Timestamp,
    pub merged_at: Option<Timestamp>,
}

impl PullRequest {
    /// Opens a pull request with already selected reviewers.
    pub fn open(new: NewPullRequest, reviewers: Vec<UserId>, created_at: Timestamp) -> Self {
        Self {
            id: new.id,
            name: new.name,
            author_id: new.author_id,
            status: PullRequestStatus::Open,
            assigned_reviewers: reviewers,
            created_at,
            merged_at: None,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    pub fn is_assigned(&self, user_id: &UserId) -> bool {
        self.assigned_reviewers.contains(user_id)
    }

    /// Checks the preconditions for replacing `old_reviewer`.
    ///
    /// A merged pull request is rejected before assignment is looked at, so
    /// `PR_MERGED` wins even for users that were never assigned.
    pub fn ensure_reassignable(&self, old_reviewer: &UserId) -> Result<(), DomainError> {
        if self.is_merged() {
            return Err(DomainError::new(
                ErrorCode::PullRequestMerged,
                format!("pull request '{}' is already merged", self.id),
            ));
        }
        if !self.is_assigned(old_reviewer) {
            return Err(DomainError::new(
                ErrorCode::NotAssigned,
                format!(
                    "user '{}' is not assigned to pull request '{}'",
                    old_reviewer, self.id
                ),
            ));
        }
        Ok(())
    }

    /// Marks the pull request merged.
    ///
    /// Returns `false` and leaves the state untouched when it was already
    /// merged; `merged_at` is only ever set by the first call.
    pub fn merge(&mut self, at: Timestamp) -> bool {
        match self.status.transition_to(PullRequestStatus::Merged) {
            Ok(status) => {
                self.status = status;
                self.merged_at = Some(at);
                true
            }
            Err(_) => false,
        }
    }

    /// Swaps `old` for `new` in the reviewer list. `new` goes last.
    pub fn replace_reviewer(&mut self, old: &UserId, new: UserId) {
        self.assigned_reviewers.retain(|r| r != old);
        self.assigned_reviewers.push(new);
    }

    pub fn summary(&self) -> PullRequestSummary {
        PullRequestSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            author_id: self.author_id.clone(),
            status: self.status,
        }
    }
}

/// Short form of a pull request used in review listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub id: PullRequestId,
    pub name: String,
    pub author_id: UserId,
    pub status: PullRequestStatus,
}

/// Outcome of a successful reviewer reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub pull_request: PullRequest,
    pub replaced_by: UserId,
}
