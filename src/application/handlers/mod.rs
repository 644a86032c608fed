//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Handlers
//! validate raw input into domain identifiers, then delegate to a port.

pub mod pull_request;
pub mod team;
pub mod user;
