//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::pull_request::{
    CreatePullRequestCommand, CreatePullRequestHandler, GetPullRequestHandler,
    GetPullRequestQuery, MergePullRequestCommand, MergePullRequestHandler,
    ReassignReviewerCommand, ReassignReviewerHandler,
};
pub use handlers::team::{AddTeamCommand, AddTeamHandler, GetTeamHandler, GetTeamQuery, NewTeamMember};
pub use handlers::user::{
    GetReviewHandler, GetReviewQuery, GetReviewResult, GetUserHandler, GetUserQuery,
    SetIsActiveCommand, SetIsActiveHandler,
};
