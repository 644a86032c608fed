//! Pull request repository port.
//!
//! Every method is a single atomic unit: reviewer selection happens inside
//! the same transaction (or lock) as the write that records it, so two
//! concurrent reassignments on one pull request cannot both succeed against
//! a stale reviewer list.
//!
//! # Example
//!
//! ```ignore
//! async fn open(repo: &dyn PullRequestRepository) -> Result<PullRequest, DomainError> {
//!     let pr = repo
//!         .create(&NewPullRequest {
//!             id: PullRequestId::new("pr-1001")?,
//!             name: "Add search".to_string(),
//!             author_id: UserId::new("u1")?,
//!         })
//!         .await?;
//!     assert!(pr.assigned_reviewers.len() <= MAX_REVIEWERS);
//!     Ok(pr)
//! }
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PullRequestId, UserId};
use crate::domain::pull_request::{NewPullRequest, PullRequest, Reassignment};

/// Repository port for pull request persistence and reviewer assignment.
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Open a pull request and assign up to two reviewers from the author's team.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the author or the author's team does not exist
    /// - `PullRequestExists` if the id is taken
    async fn create(&self, new: &NewPullRequest) -> Result<PullRequest, DomainError>;

    /// Mark a pull request merged.
    ///
    /// Idempotent: merging a merged pull request returns it unchanged.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the pull request does not exist
    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError>;

    /// Replace `old_reviewer` with another active member of the author's team.
    ///
    /// The new reviewer is appended to the end of the reviewer list.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the pull request does not exist
    /// - `PullRequestMerged` if the pull request is merged
    /// - `NotAssigned` if `old_reviewer` is not a reviewer of it
    /// - `NoCandidate` if nobody can take over
    async fn reassign(
        &self,
        id: &PullRequestId,
        old_reviewer: &UserId,
    ) -> Result<Reassignment, DomainError>;

    /// Find a pull request with its reviewers.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the pull request does not exist
    async fn find_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError>;
}
