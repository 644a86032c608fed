//! User entity joined with its team name.

use crate::domain::foundation::{TeamId, TeamName, UserId};
use crate::domain::team::TeamMember;

/// A user as read back from a store, carrying the name of its team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub team_id: TeamId,
    pub team_name: TeamName,
    pub is_active: bool,
}

impl User {
    /// Roster view of this user, dropping the team reference.
    pub fn as_member(&self) -> TeamMember {
        TeamMember::new(self.user_id.clone(), self.username.clone(), self.is_active)
    }
}
