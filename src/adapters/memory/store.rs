//! In-memory store implementing every repository port.
//!
//! Each operation runs under a single write (or read) lock on the whole
//! state and validates before mutating, so a failed call leaves nothing
//! behind. Useful for tests and for running without a database.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, PullRequestId, TeamId, TeamName, Timestamp, UserId,
};
use crate::domain::pull_request::{
    select_initial_reviewers, select_replacement, NewPullRequest, PullRequest,
    PullRequestSummary, Reassignment,
};
use crate::domain::team::{Team, TeamMember};
use crate::domain::user::User;
use crate::ports::{PullRequestRepository, TeamRepository, UserRepository};

#[derive(Debug, Clone)]
struct UserRecord {
    username: String,
    team_id: TeamId,
    is_active: bool,
}

#[derive(Debug, Default)]
struct State {
    teams: Vec<TeamName>,
    users: BTreeMap<UserId, UserRecord>,
    pull_requests: Vec<PullRequest>,
}

impl State {
    fn team_id(&self, name: &TeamName) -> Option<TeamId> {
        self.teams
            .iter()
            .position(|t| t == name)
            .map(|idx| TeamId::from_i64(idx as i64 + 1))
    }

    fn team_name(&self, id: TeamId) -> Option<&TeamName> {
        usize::try_from(id.as_i64() - 1)
            .ok()
            .and_then(|idx| self.teams.get(idx))
    }

    /// Members ordered by user id.
    fn members_of(&self, team_id: TeamId) -> Vec<TeamMember> {
        self.users
            .iter()
            .filter(|(_, record)| record.team_id == team_id)
            .map(|(id, record)| TeamMember::new(id.clone(), record.username.clone(), record.is_active))
            .collect()
    }

    fn user(&self, user_id: &UserId) -> Result<User, DomainError> {
        let record = self
            .users
            .get(user_id)
            .ok_or_else(|| DomainError::not_found("user", user_id))?;
        let team_name = self.team_name(record.team_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("user '{}' references a missing team", user_id),
            )
        })?;
        Ok(User {
            user_id: user_id.clone(),
            username: record.username.clone(),
            team_id: record.team_id,
            team_name: team_name.clone(),
            is_active: record.is_active,
        })
    }

    fn upsert(&mut self, team_id: TeamId, members: &[TeamMember]) {
        for member in members {
            self.users.insert(
                member.user_id.clone(),
                UserRecord {
                    username: member.username.clone(),
                    team_id,
                    is_active: member.is_active,
                },
            );
        }
    }

    fn pull_request_mut(&mut self, id: &PullRequestId) -> Result<&mut PullRequest, DomainError> {
        self.pull_requests
            .iter_mut()
            .find(|pr| &pr.id == id)
            .ok_or_else(|| DomainError::not_found("pull request", id))
    }
}

/// Process-local implementation of all repository ports.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create(&self, name: &TeamName, members: &[TeamMember]) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.team_id(name).is_some() {
            return Err(
                DomainError::new(ErrorCode::TeamExists, format!("team '{}' already exists", name))
                    .with_detail("team_name", name.as_str()),
            );
        }
        state.teams.push(name.clone());
        let team_id = TeamId::from_i64(state.teams.len() as i64);
        state.upsert(team_id, members);
        Ok(())
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Team, DomainError> {
        let state = self.state.read().await;
        let id = state
            .team_id(name)
            .ok_or_else(|| DomainError::not_found("team", name))?;
        Ok(Team {
            id,
            name: name.clone(),
            members: state.members_of(id),
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, user_id: &UserId) -> Result<User, DomainError> {
        self.state.read().await.user(user_id)
    }

    async fn find_by_team(&self, team_id: TeamId) -> Result<Vec<User>, DomainError> {
        let state = self.state.read().await;
        let users = state
            .members_of(team_id)
            .iter()
            .map(|m| state.user(&m.user_id))
            .collect::<Result<Vec<_>, _>>()?;
        if users.is_empty() {
            return Err(DomainError::not_found("team", team_id));
        }
        Ok(users)
    }

    async fn set_is_active(&self, user_id: &UserId, is_active: bool) -> Result<User, DomainError> {
        let mut state = self.state.write().await;
        let record = state
            .users
            .get_mut(user_id)
            .ok_or_else(|| DomainError::not_found("user", user_id))?;
        record.is_active = is_active;
        state.user(user_id)
    }

    async fn upsert_many(&self, team_id: TeamId, members: &[TeamMember]) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.team_name(team_id).is_none() {
            return Err(DomainError::not_found("team", team_id));
        }
        state.upsert(team_id, members);
        Ok(())
    }

    async fn find_reviews(&self, user_id: &UserId) -> Result<Vec<PullRequestSummary>, DomainError> {
        let state = self.state.read().await;
        if !state.users.contains_key(user_id) {
            return Err(DomainError::not_found("user", user_id));
        }
        let mut reviews: Vec<&PullRequest> = state
            .pull_requests
            .iter()
            .filter(|pr| pr.is_assigned(user_id))
            .collect();
        reviews.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(reviews.into_iter().map(PullRequest::summary).collect())
    }
}

#[async_trait]
impl PullRequestRepository for InMemoryStore {
    async fn create(&self, new: &NewPullRequest) -> Result<PullRequest, DomainError> {
        let mut state = self.state.write().await;
        let team_id = state
            .users
            .get(&new.author_id)
            .map(|record| record.team_id)
            .ok_or_else(|| DomainError::not_found("user", &new.author_id))?;
        if state.pull_requests.iter().any(|pr| pr.id == new.id) {
            return Err(DomainError::new(
                ErrorCode::PullRequestExists,
                format!("pull request '{}' already exists", new.id),
            )
            .with_detail("pull_request_id", new.id.as_str()));
        }

        let reviewers = select_initial_reviewers(&new.author_id, &state.members_of(team_id));
        let pull_request = PullRequest::open(new.clone(), reviewers, Timestamp::now());
        state.pull_requests.push(pull_request.clone());
        Ok(pull_request)
    }

    async fn merge(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let mut state = self.state.write().await;
        let pull_request = state.pull_request_mut(id)?;
        pull_request.merge(Timestamp::now());
        Ok(pull_request.clone())
    }

    async fn reassign(
        &self,
        id: &PullRequestId,
        old_reviewer: &UserId,
    ) -> Result<Reassignment, DomainError> {
        let mut state = self.state.write().await;
        let current = state.pull_request_mut(id)?.clone();
        current.ensure_reassignable(old_reviewer)?;

        let team = state
            .users
            .get(&current.author_id)
            .map(|record| state.members_of(record.team_id))
            .unwrap_or_default();
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

        let pull_request = state.pull_request_mut(id)?;
        pull_request.replace_reviewer(old_reviewer, replacement.clone());
        Ok(Reassignment {
            pull_request: pull_request.clone(),
            replaced_by: replacement,
        })
    }

    async fn find_by_id(&self, id: &PullRequestId) -> Result<PullRequest, DomainError> {
        let state = self.state.read().await;
        state
            .pull_requests
            .iter()
            .find(|pr| &pr.id == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("pull request", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pull_request::PullRequestStatus;

    fn uid(s: &str) -> UserId {
        UserId::new(s).unwrap()
    }

    fn pr_id(s: &str) -> PullRequestId {
        PullRequestId::new(s).unwrap()
    }

    fn member(id: &str, active: bool) -> TeamMember {
        TeamMember::new(uid(id), format!("name-{}", id), active)
    }

    async fn store_with_team(members: Vec<TeamMember>) -> InMemoryStore {
        let store = InMemoryStore::new();
        TeamRepository::create(&store, &TeamName::new("core").unwrap(), &members)
            .await
            .unwrap();
        store
    }

    async fn open(store: &InMemoryStore, id: &str, author: &str) -> PullRequest {
        PullRequestRepository::create(
            store,
            &NewPullRequest {
                id: pr_id(id),
                name: format!("change {}", id),
                author_id: uid(author),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_team_is_rejected_without_touching_users() {
        let store = store_with_team(vec![member("u1", true)]).await;
        let err = TeamRepository::create(
            &store,
            &TeamName::new("core").unwrap(),
            &[member("u1", false)],
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::TeamExists);
        assert!(UserRepository::find_by_id(&store, &uid("u1")).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn new_team_moves_existing_users() {
        let store = store_with_team(vec![member("u1", true), member("u2", true)]).await;
        TeamRepository::create(&store, &TeamName::new("infra").unwrap(), &[member("u2", false)])
            .await
            .unwrap();

        let core = store.find_by_name(&TeamName::new("core").unwrap()).await.unwrap();
        assert_eq!(core.members, vec![member("u1", true)]);
        let moved = UserRepository::find_by_id(&store, &uid("u2")).await.unwrap();
        assert_eq!(moved.team_name.as_str(), "infra");
        assert!(!moved.is_active);
    }

    #[tokio::test]
    async fn create_assigns_first_two_active_teammates() {
        let store = store_with_team(vec![
            member("u4", true),
            member("u1", true),
            member("u3", true),
            member("u2", false),
        ])
        .await;
        let pr = open(&store, "pr-1", "u1").await;
        assert_eq!(pr.assigned_reviewers, vec![uid("u3"), uid("u4")]);
        assert_eq!(pr.status, PullRequestStatus::Open);
    }

    #[tokio::test]
    async fn create_rejects_unknown_author_and_duplicate_id() {
        let store = store_with_team(vec![member("u1", true)]).await;
        let err = PullRequestRepository::create(
            &store,
            &NewPullRequest {
                id: pr_id("pr-1"),
                name: "x".to_string(),
                author_id: uid("ghost"),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let first = open(&store, "pr-1", "u1").await;
        let err = PullRequestRepository::create(
            &store,
            &NewPullRequest {
                id: pr_id("pr-1"),
                name: "other".to_string(),
                author_id: uid("u1"),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::PullRequestExists);
        assert_eq!(PullRequestRepository::find_by_id(&store, &pr_id("pr-1")).await.unwrap(), first);
    }

    #[tokio::test]
    async fn merge_is_idempotent() {
        let store = store_with_team(vec![member("u1", true), member("u2", true)]).await;
        open(&store, "pr-1", "u1").await;

        let first = store.merge(&pr_id("pr-1")).await.unwrap();
        let second = store.merge(&pr_id("pr-1")).await.unwrap();
        assert_eq!(first.status, PullRequestStatus::Merged);
        assert_eq!(first.merged_at, second.merged_at);
        assert_eq!(second.assigned_reviewers, vec![uid("u2")]);

        let err = store.merge(&pr_id("missing")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn reassign_appends_replacement() {
        let store = store_with_team(vec![
            member("u1", true),
            member("u2", true),
            member("u3", true),
            member("u4", true),
        ])
        .await;
        open(&store, "pr-1", "u1").await;

        let outcome = store.reassign(&pr_id("pr-1"), &uid("u2")).await.unwrap();
        assert_eq!(outcome.replaced_by, uid("u4"));
        assert_eq!(outcome.pull_request.assigned_reviewers, vec![uid("u3"), uid("u4")]);
    }

    #[tokio::test]
    async fn reassign_failures_leave_reviewers_unchanged() {
        let store = store_with_team(vec![
            member("u1", true),
            member("u2", true),
            member("u3", false),
        ])
        .await;
        open(&store, "pr-1", "u1").await;

        let err = store.reassign(&pr_id("pr-1"), &uid("u2")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NoCandidate);
        let err = store.reassign(&pr_id("pr-1"), &uid("u3")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAssigned);

        let pr = PullRequestRepository::find_by_id(&store, &pr_id("pr-1")).await.unwrap();
        assert_eq!(pr.assigned_reviewers, vec![uid("u2")]);
    }

    #[tokio::test]
    async fn reviews_include_merged_pull_requests() {
        let store = store_with_team(vec![member("u1", true), member("u2", true)]).await;
        open(&store, "pr-1", "u1").await;
        open(&store, "pr-2", "u1").await;
        store.merge(&pr_id("pr-1")).await.unwrap();

        let reviews = store.find_reviews(&uid("u2")).await.unwrap();
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["pr-1", "pr-2"]);
        assert_eq!(reviews[0].status, PullRequestStatus::Merged);

        assert!(store.find_reviews(&uid("u1")).await.unwrap().is_empty());
        assert_eq!(
            store.find_reviews(&uid("nobody")).await.unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[tokio::test]
    async fn deactivation_keeps_existing_assignments() {
        let store = store_with_team(vec![member("u1", true), member("u2", true)]).await;
        open(&store, "pr-1", "u1").await;

        let user = store.set_is_active(&uid("u2"), false).await.unwrap();
        assert!(!user.is_active);
        assert_eq!(user.team_name.as_str(), "core");
        assert_eq!(store.find_reviews(&uid("u2")).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_team_and_upsert_many() {
        let store = store_with_team(vec![member("u2", true), member("u1", true)]).await;
        let team = store.find_by_name(&TeamName::new("core").unwrap()).await.unwrap();

        store
            .upsert_many(team.id, &[member("u3", false), member("u1", false)])
            .await
            .unwrap();
        let users = store.find_by_team(team.id).await.unwrap();
        let ids: Vec<&str> = users.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);
        assert!(!users[0].is_active);

        assert_eq!(
            store.find_by_team(TeamId::from_i64(99)).await.unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
