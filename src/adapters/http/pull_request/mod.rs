//! Pull request HTTP endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use routes::pull_request_routes;
