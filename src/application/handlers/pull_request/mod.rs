//! Pull request command and query handlers.

mod create_pull_request;
mod get_pull_request;
mod merge_pull_request;
mod reassign_reviewer;

pub use create_pull_request::{CreatePullRequestCommand, CreatePullRequestHandler};
pub use get_pull_request::{GetPullRequestHandler, GetPullRequestQuery};
pub use merge_pull_request::{MergePullRequestCommand, MergePullRequestHandler};
pub use reassign_reviewer::{ReassignReviewerCommand, ReassignReviewerHandler};
