//! SetIsActiveHandler - Command handler for toggling a user's activity flag.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;
use crate::ports::UserRepository;

/// Command to set a user's activity flag.
#[derive(Debug, Clone)]
pub struct SetIsActiveCommand {
    pub user_id: String,
    pub is_active: bool,
}

/// Handler for activity changes.
///
/// Inactive users stop being offered as reviewers but keep the
/// assignments they already hold.
pub struct SetIsActiveHandler {
    users: Arc<dyn UserRepository>,
}

impl SetIsActiveHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: SetIsActiveCommand) -> Result<User, DomainError> {
        let user_id = UserId::new(cmd.user_id)?;
        self.users.set_is_active(&user_id, cmd.is_active).await
    }
}
