//! AddTeamHandler - Command handler for creating a team with its roster.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TeamName, UserId};
use crate::domain::team::{Team, TeamMember};
use crate::ports::TeamRepository;

/// One roster entry of an [`AddTeamCommand`].
#[derive(Debug, Clone)]
pub struct NewTeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Command to create a team and upsert its members.
#[derive(Debug, Clone)]
pub struct AddTeamCommand {
    pub team_name: String,
    pub members: Vec<NewTeamMember>,
}

/// Handler for creating teams.
///
/// Returns the team as stored, re-read after creation.
pub struct AddTeamHandler {
    teams: Arc<dyn TeamRepository>,
}

impl AddTeamHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, cmd: AddTeamCommand) -> Result<Team, DomainError> {
        let name = TeamName::new(cmd.team_name)?;
        let members = cmd
            .members
            .into_iter()
            .map(|m| {
                let user_id = UserId::new(m.user_id)?;
                Ok(TeamMember::new(user_id, m.username, m.is_active))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        self.teams.create(&name, &members).await?;
        self.teams.find_by_name(&name).await
    }
}
