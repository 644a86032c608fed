//! User repository port.
//!
//! Users are created only through team creation; this port reads them,
//! toggles their activity flag and lists the pull requests they review.
//!
//! `find_by_team` and `upsert_many` are store-level capabilities with no
//! HTTP route of their own. Team creation performs the same member upsert
//! inside its own transaction so the team row and its members commit
//! together; see `TeamRepository::create`.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeamId, UserId};
use crate::domain::pull_request::PullRequestSummary;
use crate::domain::team::TeamMember;
use crate::domain::user::User;

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user together with its team name.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    async fn find_by_id(&self, user_id: &UserId) -> Result<User, DomainError>;

    /// All members of a team, ordered by user id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the team has no users
    async fn find_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError>;

    /// Set a user's activity flag and return the updated user.
    ///
    /// Existing reviewer assignments are left untouched.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    async fn set_is_active(&self, user_id: &UserId, is_active: bool)
        -> Result<User, DomainError>;

    /// Insert or update users so that they belong to `team_id`.
    ///
    /// Existing users are moved and their username and activity flag
    /// overwritten. Runs in its own transaction.
    async fn upsert_many(&self, team_id: TeamId, members: &[TeamMember])
        -> Result<(), DomainError>;

    /// Pull requests the user is currently assigned to review.
    ///
    /// Includes merged pull requests, ordered by creation time.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    async fn find_reviews(&self, user_id: &UserId) -> Result<Vec<PullRequestSummary>, DomainError>;
}
