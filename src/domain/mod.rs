//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `team` - Team roster
//! - `user` - Users and their activity flag
//! - `pull_request` - Pull requests and reviewer selection

pub mod foundation;
pub mod pull_request;
pub mod team;
pub mod user;
