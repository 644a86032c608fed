//! GetTeamHandler - Query handler for reading a team roster.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, TeamName};
use crate::domain::team::Team;
use crate::ports::TeamRepository;

/// Query for a team by name.
#[derive(Debug, Clone)]
pub struct GetTeamQuery {
    pub team_name: String,
}

pub struct GetTeamHandler {
    teams: Arc<dyn TeamRepository>,
}

impl GetTeamHandler {
    pub fn new(teams: Arc<dyn TeamRepository>) -> Self {
        Self { teams }
    }

    pub async fn handle(&self, query: GetTeamQuery) -> Result<Team, DomainError> {
        let name = TeamName::new(query.team_name)?;
        self.teams.find_by_name(&name).await
    }
}
