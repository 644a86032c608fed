//! Team command and query handlers.

mod add_team;
mod get_team;

pub use add_team::{AddTeamCommand, AddTeamHandler, NewTeamMember};
pub use get_team::{GetTeamHandler, GetTeamQuery};
