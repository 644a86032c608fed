//! User command and query handlers.

mod get_review;
mod get_user;
mod set_is_active;

pub use get_review::{GetReviewHandler, GetReviewQuery, GetReviewResult};
pub use get_user::{GetUserHandler, GetUserQuery};
pub use set_is_active::{SetIsActiveCommand, SetIsActiveHandler};
