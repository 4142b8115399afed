use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{StoredCredentials, UserPersistenceError, UserRepository};
use crate::domain::{PasswordDigest, User, UserId, Username};

#[derive(Default)]
struct State {
    by_id: HashMap<UserId, StoredCredentials>,
    by_username: HashMap<Username, UserId>,
}

/// In-memory [`UserRepository`] enforcing unique usernames.
#[derive(Default)]
pub struct MemoryUserRepository {
    state: RwLock<State>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(
        &self,
        user: &User,
        digest: &PasswordDigest,
    ) -> Result<(), UserPersistenceError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| UserPersistenceError::query(POISONED))?;
        if state.by_username.contains_key(user.username()) {
            return Err(UserPersistenceError::duplicate_username(
                user.username().as_ref(),
            ));
        }
        state
            .by_username
            .insert(user.username().clone(), user.id().clone());
        state.by_id.insert(
            user.id().clone(),
            StoredCredentials {
                user: user.clone(),
                digest: digest.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self
            .state
            .read()
            .map_err(|_| UserPersistenceError::query(POISONED))?;
        Ok(state.by_id.get(id).map(|stored| stored.user.clone()))
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<StoredCredentials>, UserPersistenceError> {
        let state = self
            .state
            .read()
            .map_err(|_| UserPersistenceError::query(POISONED))?;
        Ok(state
            .by_username
            .get(username)
            .and_then(|id| state.by_id.get(id))
            .cloned())
    }
}
