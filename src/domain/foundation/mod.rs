//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the review roster domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind, ValidationError};
pub use ids::{PullRequestId, TeamId, TeamName, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
