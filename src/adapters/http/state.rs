//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgres::{
    PostgresPullRequestRepository, PostgresTeamRepository, PostgresUserRepository,
};
use crate::application::{
    AddTeamHandler, CreatePullRequestHandler, GetPullRequestHandler, GetReviewHandler,
    GetTeamHandler, GetUserHandler, MergePullRequestHandler, ReassignReviewerHandler,
    SetIsActiveHandler,
};
use crate::ports::{PullRequestRepository, TeamRepository, UserRepository};

/// Shared application state containing all dependencies.
///
/// Cloned for each request; the repositories are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub users: Arc<dyn UserRepository>,
    pub pull_requests: Arc<dyn PullRequestRepository>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            pull_requests: Arc::new(PostgresPullRequestRepository::new(pool)),
        }
    }

    /// State backed by one shared in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            teams: store.clone(),
            users: store.clone(),
            pull_requests: store,
        }
    }

    pub fn add_team_handler(&self) -> AddTeamHandler {
        AddTeamHandler::new(self.teams.clone())
    }

    pub fn get_team_handler(&self) -> GetTeamHandler {
        GetTeamHandler::new(self.teams.clone())
    }

    pub fn set_is_active_handler(&self) -> SetIsActiveHandler {
        SetIsActiveHandler::new(self.users.clone())
    }

    pub fn get_review_handler(&self) -> GetReviewHandler {
        GetReviewHandler::new(self.users.clone())
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn create_pull_request_handler(&self) -> CreatePullRequestHandler {
        CreatePullRequestHandler::new(self.pull_requests.clone())
    }

    pub fn merge_pull_request_handler(&self) -> MergePullRequestHandler {
        MergePullRequestHandler::new(self.pull_requests.clone())
    }

    pub fn reassign_reviewer_handler(&self) -> ReassignReviewerHandler {
        ReassignReviewerHandler::new(self.pull_requests.clone())
    }

    pub fn get_pull_request_handler(&self) -> GetPullRequestHandler {
        GetPullRequestHandler::new(self.pull_requests.clone())
    }
}
