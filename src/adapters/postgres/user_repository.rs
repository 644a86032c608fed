//! PostgreSQL implementation of UserRepository.
//!
//! Also hosts the member upsert and roster queries that team creation and
//! reviewer selection run inside their own transactions.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use crate::domain::foundation::{DomainError, TeamId, TeamName, UserId};
use crate::domain::pull_request::{PullRequestStatus, PullRequestSummary};
use crate::domain::team::TeamMember;
use crate::domain::user::User;
use crate::ports::UserRepository;

use super::errors::{corrupt_row, storage_failure};
use super::unit_of_work::UnitOfWork;

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A user joined with its team.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    team_id: i64,
    team_name: String,
    is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            user_id: UserId::new(row.user_id).map_err(|e| corrupt_row("user_id", e))?,
            username: row.username,
            team_id: TeamId::from_i64(row.team_id),
            team_name: TeamName::new(row.team_name).map_err(|e| corrupt_row("team_name", e))?,
            is_active: row.is_active,
        })
    }
}

/// Roster entry as stored in `users`.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    user_id: String,
    username: String,
    is_active: bool,
}

impl TryFrom<MemberRow> for TeamMember {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.user_id).map_err(|e| corrupt_row("user_id", e))?;
        Ok(TeamMember::new(user_id, row.username, row.is_active))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReviewRow {
    pull_request_id: String,
    pull_request_name: String,
    author_id: String,
    status: String,
}

impl TryFrom<ReviewRow> for PullRequestSummary {
    type Error = DomainError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        use crate::domain::foundation::PullRequestId;

        Ok(PullRequestSummary {
            id: PullRequestId::new(row.pull_request_id)
                .map_err(|e| corrupt_row("pull_request_id", e))?,
            name: row.pull_request_name,
            author_id: UserId::new(row.author_id).map_err(|e| corrupt_row("author_id", e))?,
            status: row
                .status
                .parse::<PullRequestStatus>()
                .map_err(|e| corrupt_row("status", e))?,
        })
    }
}

/// Insert or update every member so that it belongs to `team_id`.
///
/// A user listed twice ends up with the values of its last entry.
pub(super) async fn upsert_members(
    conn: &mut PgConnection,
    team_id: TeamId,
    members: &[TeamMember],
) -> Result<(), DomainError> {
    for member in members {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, username, team_id, is_active)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE SET
                username = EXCLUDED.username,
                team_id = EXCLUDED.team_id,
                is_active = EXCLUDED.is_active
            "#,
        )
        .bind(member.user_id.as_str())
        .bind(&member.username)
        .bind(team_id.as_i64())
        .bind(member.is_active)
        .execute(&mut *conn)
        .await
        .map_err(|e| storage_failure("upsert team member", e))?;
    }
    Ok(())
}

/// Current members of a team ordered by user id.
pub(super) async fn load_team_members(
    conn: &mut PgConnection,
    team_id: TeamId,
) -> Result<Vec<TeamMember>, DomainError> {
    let rows: Vec<MemberRow> = sqlx::query_as(
        r#"
        SELECT user_id, username, is_active
        FROM users
        WHERE team_id = $1
        ORDER BY user_id
        "#,
    )
    .bind(team_id.as_i64())
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| storage_failure("load team members", e))?;

    rows.into_iter().map(TeamMember::try_from).collect()
}

/// Team of a user, or `None` when the user does not exist.
pub(super) async fn find_team_of(
    conn: &mut PgConnection,
    user_id: &UserId,
) -> Result<Option<TeamId>, DomainError> {
    let team_id: Option<i64> = sqlx::query_scalar("SELECT team_id FROM users WHERE user_id = $1")
        .bind(user_id.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| storage_failure("resolve user team", e))?;
    Ok(team_id.map(TeamId::from_i64))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT u.user_id, u.username, u.team_id, t.team_name, u.is_active
            FROM users u
            JOIN team t ON t.id = u.team_id
            WHERE u.user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_failure("load user", e))?;

        row.ok_or_else(|| DomainError::not_found("user", user_id))?
            .try_into()
    }

    async fn find_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT u.user_id, u.username, u.team_id, t.team_name, u.is_active
            FROM users u
            JOIN team t ON t.id = u.team_id
            WHERE u.team_id = $1
            ORDER BY u.user_id
            "#,
        )
        .bind(team_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_failure("load team users", e))?;

        if rows.is_empty() {
            return Err(DomainError::not_found("team", team_id));
        }
        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_is_active(&self, user_id: &UserId, is_active: bool) -> Result<User, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            WITH updated AS (
                UPDATE users SET is_active = $2
                WHERE user_id = $1
                RETURNING user_id, username, team_id, is_active
            )
            SELECT u.user_id, u.username, u.team_id, t.team_name, u.is_active
            FROM updated u
            JOIN team t ON t.id = u.team_id
            "#,
        )
        .bind(user_id.as_str())
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_failure("update user activity", e))?;

        let user: User = row
            .ok_or_else(|| DomainError::not_found("user", user_id))?
            .try_into()?;
        tracing::info!(user_id = %user.user_id, is_active, "user activity updated");
        Ok(user)
    }

    async fn upsert_many(&self, team_id: TeamId, members: &[TeamMember]) -> Result<(), DomainError> {
        let mut uow = UnitOfWork::begin(&self.pool).await?;
        upsert_members(uow.conn(), team_id, members).await?;
        uow.commit().await
    }

    async fn find_reviews(&self, user_id: &UserId) -> Result<Vec<PullRequestSummary>, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(user_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| storage_failure("check user", e))?;
        if !exists {
            return Err(DomainError::not_found("user", user_id));
        }

        let rows: Vec<ReviewRow> = sqlx::query_as(
            r#"
            SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status
            FROM pull_request_reviewer r
            JOIN pull_request pr ON pr.pull_request_id = r.pull_request_id
            WHERE r.user_id = $1
            ORDER BY pr.created_at, pr.pull_request_id
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_failure("load reviews", e))?;

        rows.into_iter().map(PullRequestSummary::try_from).collect()
    }
}
