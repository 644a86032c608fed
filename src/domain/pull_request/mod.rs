//! Pull request domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - PullRequest entity, summaries and reassignment outcome
//! - `status` - PullRequestStatus state machine (OPEN -> MERGED)
//! - `reviewer_policy` - deterministic reviewer selection

mod aggregate;
mod reviewer_policy;
mod status;

pub use aggregate::{NewPullRequest, PullRequest, PullRequestSummary, Reassignment};
pub use reviewer_policy::{select_initial_reviewers, select_replacement, MAX_REVIEWERS};
pub use status::PullRequestStatus;
