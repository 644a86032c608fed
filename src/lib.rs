//! Review Roster - team roster and pull request reviewer assignment.
//!
//! Teams register their members, authors open pull requests and the service
//! picks up to two active teammates as reviewers. Reviewers can be swapped
//! while a pull request is open; merging freezes the assignment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
