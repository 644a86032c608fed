//! Team repository port.
//!
//! Creating a team also creates or updates every user on its roster, so
//! implementations must perform both writes atomically.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeamName};
use crate::domain::team::{Team, TeamMember};

/// Repository port for team persistence.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a team and upsert its members.
    ///
    /// Members that already exist are moved into the new team with their
    /// username and activity flag overwritten.
    ///
    /// # Errors
    ///
    /// - `TeamExists` if a team with this name already exists
    /// - `DatabaseError` on persistence failure
    async fn create(&self, name: &TeamName, members: &[TeamMember]) -> Result<(), DomainError>;

    /// Find a team and its current members.
    ///
    /// Members are ordered by user id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no such team exists
    async fn find_by_name(&self, name: &TeamName) -> Result<Team, DomainError>;
}
