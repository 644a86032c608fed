//! Team HTTP endpoints.

pub mod dto;
mod handlers;
mod routes;

pub use routes::team_routes;
