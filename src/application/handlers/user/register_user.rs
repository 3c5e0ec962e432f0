//! RegisterUserHandler - registration of hosts and guests.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError, UserRole};
use crate::ports::UserRepository;

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub role: UserRole,
}

/// Handler for user registration.
pub struct RegisterUserHandler {
    users: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a user with a unique, well-formed username.
    ///
    /// # Errors
    ///
    /// - `UsernameTaken` when the username already exists
    /// - `InvalidUsername` when the username is outside 3-20 characters
    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<User, UserError> {
        if self.users.find_by_username(cmd.username.trim()).await?.is_some() {
            return Err(UserError::UsernameTaken(cmd.username));
        }

        let user = User::new(UserId::new(), cmd.username, cmd.role)?;
        self.users.add(&user).await?;

        info!(user_id = %user.id(), username = user.username(), role = %user.role(), "user registered");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;

    fn handler() -> (RegisterUserHandler, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        (RegisterUserHandler::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn registers_host_and_guest() {
        let (handler, repo) = handler();

        let host = handler
            .handle(RegisterUserCommand {
                username: "alice_host".into(),
                role: UserRole::Host,
            })
            .await
            .unwrap();
        assert_eq!(host.role(), UserRole::Host);

        let guest = handler
            .handle(RegisterUserCommand {
                username: "bob_guest".into(),
                role: UserRole::Guest,
            })
            .await
            .unwrap();
        assert_eq!(guest.role(), UserRole::Guest);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn rejects_duplicate_username() {
        let (handler, _) = handler();
        let cmd = RegisterUserCommand {
            username: "alice_host".into(),
            role: UserRole::Host,
        };
        handler.handle(cmd.clone()).await.unwrap();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err, UserError::UsernameTaken("alice_host".into()));
    }

    #[tokio::test]
    async fn rejects_out_of_range_username_lengths() {
        let (handler, repo) = handler();

        for username in ["ab", &"x".repeat(21)] {
            let err = handler
                .handle(RegisterUserCommand {
                    username: username.to_string(),
                    role: UserRole::Guest,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, UserError::InvalidUsername(_)));
        }
        assert!(repo.is_empty());
    }
}
