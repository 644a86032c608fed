//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresTeamRepository` - Team creation with member upsert
//! - `PostgresUserRepository` - User lookup, activity flag and review listing
//! - `PostgresPullRequestRepository` - Pull request lifecycle and reviewer assignment
//!
//! Multi-statement operations run inside a [`UnitOfWork`].

mod errors;
mod pool;
mod pull_request_repository;
mod team_repository;
mod unit_of_work;
mod user_repository;

pub use pool::{create_pool, run_migrations};
pub use pull_request_repository::PostgresPullRequestRepository;
pub use team_repository::PostgresTeamRepository;
pub use unit_of_work::UnitOfWork;
pub use user_repository::PostgresUserRepository;
