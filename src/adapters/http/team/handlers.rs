//! HTTP handlers for team endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::{require_param, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::{AddTeamCommand, GetTeamQuery};

use super::dto::{AddTeamRequest, AddTeamResponse, TeamDto, TeamNameParams};

/// POST /team/add - Create a team and upsert its members
pub async fn add_team(
    State(state): State<AppState>,
    body: Result<Json<AddTeamRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = AddTeamCommand {
        team_name: request.team_name,
        members: request.members.into_iter().map(Into::into).collect(),
    };

    let team = state.add_team_handler().handle(cmd).await?;
    tracing::info!(team_name = %team.name, members = team.members.len(), "team added");

    let response = AddTeamResponse {
        team: TeamDto::from(team),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /team/get?team_name= - Read a team roster
pub async fn get_team(
    State(state): State<AppState>,
    params: Result<Query<TeamNameParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = GetTeamQuery {
        team_name: require_param(params.team_name, "team_name")?,
    };
    let team = state.get_team_handler().handle(query).await?;
    Ok(Json(TeamDto::from(team)))
}
