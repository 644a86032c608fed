//! User domain module.
//!
//! A user belongs to exactly one team; only active users are offered as
//! reviewers.

mod aggregate;

pub use aggregate::User;
