//! User repository
//!
//! Backs the `UserDirectory` seam the reservation engine talks to. A real
//! deployment can point the engine at an external directory instead.

use async_trait::async_trait;

use crate::{
    error::{AppError, AppResult},
    models::User,
    services::directory::UserDirectory,
};

use super::Store;

#[derive(Clone)]
pub struct UsersRepository {
    store: Store,
}

impl UsersRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Register a user record.
    pub async fn create(&self, user: &User) -> AppResult<User> {
        let mut tables = self.store.write();
        if tables.users.contains_key(&user.pid) {
            return Err(AppError::Conflict(format!(
                "User with pid {} already exists",
                user.pid
            )));
        }
        tables.users.insert(user.pid, user.clone());
        Ok(user.clone())
    }
}

#[async_trait]
impl UserDirectory for UsersRepository {
    async fn get_by_pid(&self, pid: i32) -> AppResult<User> {
        self.store
            .read()
            .users
            .get(&pid)
            .cloned()
            .ok_or(AppError::UserNotFound(pid))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut tables = self.store.write();
        match tables.users.get_mut(&user.pid) {
            Some(stored) => {
                *stored = user.clone();
                Ok(stored.clone())
            }
            None => Err(AppError::UserNotFound(user.pid)),
        }
    }
}
