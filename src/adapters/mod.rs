//! Adapters - Implementations of ports for specific technologies.
//!
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `memory` - In-process repositories for tests and database-less runs
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod postgres;
