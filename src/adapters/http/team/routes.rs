//! Axum router configuration for team endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{add_team, get_team};

/// Team routes, mounted under `/team`.
///
/// - `POST /add` - Create a team with members
/// - `GET /get?team_name=` - Read a team roster
pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_team))
        .route("/get", get(get_team))
}
