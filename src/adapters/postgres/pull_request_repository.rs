//! PostgreSQL implementation of PullRequestRepository.
//!
//! Reviewer selection runs inside the same transaction as the writes that
//! record it. Reassignment locks the pull request row first, and merge
//! takes the same lock through its conditional update, so mutations of one
//! pull request are serialized.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};

use crate::domain::foundation::{DomainError, ErrorCode, PullRequestId, TeamId, Timestamp, UserId};
use crate::domain::pull_request::{
    select_initial_reviewers, select_replacement, NewPullRequest, PullRequest,
    PullRequestStatus, Reassignment,
};
use crate::ports::PullRequestRepository;

use super::errors::{classify_insert, corrupt_row, storage_failure};
use super::unit_of_work::UnitOfWork;
use super::user_repository::{find_team_of, load_team_members};

/// PostgreSQL implementation of the PullRequestRepository port.
pub struct PostgresPullRequestRepository {
    pool: PgPool,
}

impl PostgresPullRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PullRequestRow {
    pull_request_id: String,
    pull_request_name: String,
    author_id: String,
    status: String,
    created_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
}

impl PullRequestRow {
    fn into_pull_request(self, reviewers: Vec<String>) -> Result<PullRequest, DomainError> {
        let assigned_reviewers = reviewers
            .into_iter()
            .map(|r| UserId::new(r).map_err(|e| corrupt_row("reviewer user_id", e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PullRequest {
            id: PullRequestId::new(self.pull_request_id)
                .map_err(|e| corrupt_row("pull_request_id", e))?,
            name: self.pull_request_name,
            author_id: UserId::new(self.author_id).map_err(|e| corrupt_row("author_id", e))?,
            status: self
                .status
                .parse::<PullRequestStatus>()
                .map_err(|e| corrupt_row("status", e))?,
            assigned_reviewers,
            created_at: Timestamp::from_datetime(self.created_at),
            merged_at: self.merged_at.map(Timestamp::from_datetime),
        })
    }
}

fn pull_request_exists(id: &PullRequestId) -> DomainError {
    DomainError::new(
        ErrorCode::PullRequestExists,
        format!("pull request '{}' already exists", id),
    )
    .with_detail("pull_request_id", id.as_str())
}

/// Reviewers in assignment order.
async fn load_reviewers(
    conn: &mut PgConnection,
    id: &PullRequestId,
) -> Result<Vec<String>, DomainError> {
    sqlx::query_scalar(
        "SELECT user_id FROM pull_request_reviewer WHERE pull_request_id = $1 ORDER BY id",
    )
    .bind(id.as_str())
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| storage_failure("load reviewers", e))
}

async fn insert_reviewer(
    conn: &mut PgConnection,
    id: &PullRequestId,
    reviewer: &UserId,
) -> Result<(), DomainError> {
    sqlx::query("INSERT INTO pull_request_reviewer (pull_request_id, user_id) VALUES ($1, $2)")
        .bind(id.as_str())
        .bind(reviewer.as_str())
        .execute(&mut *conn)
        .await
        .map_err(|e| storage_failure("insert reviewer", e))?;
    Ok(())
}

async fn load_pull_request(
    conn: &mut PgConnection,
    id: &PullRequestId,
) -> Result<Option<PullRequest>, DomainError> {
    let row: Option<PullRequestRow> = sqlx::query_as(
        r#"
        SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
        FROM pull_request
        WHERE pull_request_id = $1
        "#,
    )
    .bind(id.as_str())
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| storage_failure("load pull request", e))?;

    match row {
        Some(row) => {
            let reviewers = load_reviewers(conn, id).await?;
            row.into_pull_request(reviewers).map(Some)
        }
        None => Ok(None),
    }
}

#[async_trait]
impl PullRequestRepository for PostgresPullRequestRepository {
    async fn create(&self, new: &NewPullRequest) -> Result<PullRequest, DomainError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;

        let team_id = find_team_of(uow.conn(), &new.author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user", &new.author_id))?;

        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO pull_request (pull_request_id, pull_request_name, author_id, status)
            VALUES ($1, $2, $3, 'OPEN')
            RETURNING created_at
            "#,
        )
        .bind(new.id.as_str())
        .bind(&new.name)
        .bind(new.author_id.as_str())
        .fetch_one(uow.conn())
        .await
        .map_err(|e| classify_insert("insert pull request", e, || pull_request_exists(&new.id)))?;

        let team = load_team_members(uow.conn(), team_id).await?;
        let reviewers = select_initial_reviewers(&new.author_id, &team);
        for reviewer in &reviewers {
            insert_reviewer(uow.conn(), &new.id, reviewer).await?;
        }
        uow.commit().await?;

        tracing::info!(
            pull_request_id = %new.id,
            author_id = %new.author_id,
            reviewers = ?reviewers,
            "pull request created"
        );
        Ok(PullRequest::open(
            new.clone(),
            reviewers,
            Timestamp::from_datetime(created_at),
        ))
    }

    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;

        let merged: Option<PullRequestRow> = sqlx::query_as(
            r#"
            UPDATE pull_request
            SET status = 'MERGED', merged_at = NOW()
            WHERE pull_request_id = $1 AND status <> 'MERGED'
            RETURNING pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| storage_failure("merge pull request", e))?;

        let pull_request = match merged {
            Some(row) => {
                let reviewers = load_reviewers(uow.conn(), id).await?;
                tracing::info!(pull_request_id = %id, "pull request merged");
                row.into_pull_request(reviewers)?
            }
            None => load_pull_request(uow.conn(), id)
                .await?
                .ok_or_else(|| DomainError::not_found("pull request", id))?,
        };

        uow.commit().await?;
        Ok(pull_request)
    }

    async fn reassign(
        &self,
        id: &PullRequestId,
        old_reviewer: &UserId,
    ) -> Result<Reassignment, DomainError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;

        let author_team: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT u.team_id
            FROM pull_request pr
            JOIN users u ON u.user_id = pr.author_id
            WHERE pr.pull_request_id = $1
            FOR UPDATE OF pr
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(uow.conn())
        .await
        .map_err(|e| storage_failure("lock pull request", e))?;

        let team_id = author_team.ok_or_else(|| DomainError::not_found("pull request", id))?;
        let current = load_pull_request(uow.conn(), id)
            .await?
            .ok_or_else(|| DomainError::not_found("pull request", id))?;
        current.ensure_reassignable(old_reviewer)?;

        let team = load_team_members(uow.conn(), TeamId::from_i64(team_id)).await?;
        let replacement = select_replacement(
            &current.author_id,
            old_reviewer,
            &current.assigned_reviewers,
            &team,
        )
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::NoCandidate,
                format!(
                    "no active replacement candidate for '{}' in pull request '{}'",
                    old_reviewer, id
                ),
            )
        })?;

        sqlx::query("DELETE FROM pull_request_reviewer WHERE pull_request_id = $1 AND user_id = $2")
            .bind(id.as_str())
            .bind(old_reviewer.as_str())
            .execute(uow.conn())
            .await
            .map_err(|e| storage_failure("remove reviewer", e))?;
        insert_reviewer(uow.conn(), id, &replacement).await?;

        let pull_request = load_pull_request(uow.conn(), id)
            .await?
            .ok_or_else(|| DomainError::not_found("pull request", id))?;
        uow.commit().await?;

        tracing::info!(
            pull_request_id = %id,
            old_user_id = %old_reviewer,
            replaced_by = %replacement,
            "reviewer reassigned"
        );
        Ok(Reassignment {
            pull_request,
            replaced_by: replacement,
        })
    }

    async fn find_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| storage_failure("acquire connection", e))?;

        load_pull_request(&mut conn, id)
            .await?
            .ok_or_else(|| DomainError::not_found("pull request", id))
    }
}
