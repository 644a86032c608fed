//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with DTOs, handlers and routes.
//! [`build_router`] mounts them all behind the shared middleware stack.

pub mod error;
pub mod pull_request;
mod router;
mod server;
mod state;
pub mod team;
pub mod user;

pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
pub use server::{serve, ServerError};
pub use state::AppState;
