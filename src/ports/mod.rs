//! Ports - Interfaces for external dependencies.
//!
//! Ports define the contracts between the domain and the outside world.
//! Adapters implement these ports for specific storage backends.
//!
//! # Repositories
//!
//! - `TeamRepository` - Team creation and roster lookup
//! - `UserRepository` - User lookup, activity flag and review listing
//! - `PullRequestRepository` - Pull request lifecycle and reviewer assignment

mod pull_request_repository;
mod team_repository;
mod user_repository;

pub use pull_request_repository::PullRequestRepository;
pub use team_repository::TeamRepository;
pub use user_repository::UserRepository;
