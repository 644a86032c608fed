//! Request and response bodies for team endpoints.

use serde::{Deserialize, Serialize};

use crate::application::NewTeamMember;
use crate::domain::team::{Team, TeamMember};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMemberDto {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

impl From<TeamMemberDto> for NewTeamMember {
    fn from(dto: TeamMemberDto) -> Self {
        NewTeamMember {
            user_id: dto.user_id,
            username: dto.username,
            is_active: dto.is_active,
        }
    }
}

impl From<TeamMember> for TeamMemberDto {
    fn from(member: TeamMember) -> Self {
        Self {
            user_id: member.user_id.as_str().to_string(),
            username: member.username,
            is_active: member.is_active,
        }
    }
}

/// Body of `POST /team/add`.
#[derive(Debug, Clone, Deserialize)]
pub struct AddTeamRequest {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberDto>,
}

/// A team with its roster; also the body of `GET /team/get`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDto {
    pub team_name: String,
    pub members: Vec<TeamMemberDto>,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            team_name: team.name.as_str().to_string(),
            members: team.members.into_iter().map(TeamMemberDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTeamResponse {
    pub team: TeamDto,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamNameParams {
    pub team_name: Option<String>,
}
