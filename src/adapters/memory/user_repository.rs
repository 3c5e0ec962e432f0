//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

/// In-memory implementation of the user repository.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: &User) -> Result<(), UserError> {
        self.users.lock().unwrap().insert(*user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(user.id()) {
            return Err(UserError::NotFound(*user.id()));
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username() == username)
            .cloned())
    }
}
