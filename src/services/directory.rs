//! User directory seam
//!
//! The engine reads and writes user records only through this trait; who
//! actually stores identities is the embedding application's business.

use async_trait::async_trait;

use crate::{error::AppResult, models::User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look a user up by pid
    async fn get_by_pid(&self, pid: i32) -> AppResult<User>;

    /// Persist the given record over the stored one with the same pid
    async fn update(&self, user: &User) -> AppResult<User>;
}
