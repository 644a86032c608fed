//! Team aggregate: a named roster of users.

use crate::domain::foundation::{TeamId, TeamName, UserId};

/// One roster entry as supplied when a team is created or read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub user_id: UserId,
    pub username: String,
    pub is_active: bool,
}

impl TeamMember {
    pub fn new(user_id: UserId, username: impl Into<String>, is_active: bool) -> Self {
        Self {
            user_id,
            username: username.into(),
            is_active,
        }
    }
}

/// A team together with its current members.
///
/// The name is unique and never changes after creation. Membership is
/// derived from each user's `team_id`, so a user moved to another team by a
/// later upsert disappears from this roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Looks up a member by user id.
    pub fn member(&self, user_id: &UserId) -> Option<&TeamMember> {
        self.members.iter().find(|m| &m.user_id == user_id)
    }

    /// Members currently eligible to review.
    pub fn active_members(&self) -> impl Iterator<Item = &TeamMember> {
        self.members.iter().filter(|m| m.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn sample_team() -> Team {
        Team {
            id: TeamId::from_i64(1),
            name: TeamName::new("payments").unwrap(),
            members: vec![
                TeamMember::new(uid("u1"), "Alice", true),
                TeamMember::new(uid("u2"), "Bob", false),
                TeamMember::new(uid("u3"), "Carol", true),
            ],
        }
    }

    #[test]
    fn member_lookup_by_id() {
        let team = sample_team();
        assert_eq!(team.member(&uid("u2")).map(|m| m.username.as_str()), Some("Bob"));
        assert!(team.member(&uid("u9")).is_none());
    }

    #[test]
    fn active_members_skips_inactive() {
        let team = sample_team();
        let active: Vec<&str> = team.active_members().map(|m| m.user_id.as_str()).collect();
        assert_eq!(active, vec!["u1", "u3"]);
    }
}
