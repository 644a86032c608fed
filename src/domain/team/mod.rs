//! Team domain module.
//!
//! Teams own their users through each user's `team_id`.

mod aggregate;

pub use aggregate::{Team, TeamMember};
