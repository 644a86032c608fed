//! PostgreSQL implementation of TeamRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, TeamId, TeamName};
use crate::domain::team::{Team, TeamMember};
use crate::ports::TeamRepository;

use super::errors::{classify_insert, corrupt_row, storage_failure};
use super::unit_of_work::UnitOfWork;
use super::user_repository::{load_team_members, upsert_members};

/// PostgreSQL implementation of the TeamRepository port.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn team_exists(name: &TeamName) -> DomainError {
    DomainError::new(ErrorCode::TeamExists, format!("team '{}' already exists", name))
        .with_detail("team_name", name.as_str())
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, name: &TeamName, members: &[TeamMember]) -> Result<(), DomainError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;

        let team_id: i64 = sqlx::query_scalar("INSERT INTO team (team_name) VALUES ($1) RETURNING id")
            .bind(name.as_str())
            .fetch_one(uow.conn())
            .await
            .map_err(|e| classify_insert("insert team", e, || team_exists(name)))?;

        upsert_members(uow.conn(), TeamId::from_i64(team_id), members).await?;
        uow.commit().await?;

        tracing::info!(team_name = %name, team_id, members = members.len(), "team created");
        Ok(())
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Team, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| storage_failure("acquire connection", e))?;

        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, team_name FROM team WHERE team_name = $1")
                .bind(name.as_str())
                .fetch_optional(&mut *conn)
                .await
                .map_err(|e| storage_failure("load team", e))?;

        let (id, team_name) = row.ok_or_else(|| DomainError::not_found("team", name))?;
        let id = TeamId::from_i64(id);
        let members = load_team_members(&mut conn, id).await?;

        Ok(Team {
            id,
            name: TeamName::new(team_name).map_err(|e| corrupt_row("team_name", e))?,
            members,
        })
    }
}
