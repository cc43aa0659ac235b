//! Driving port for user profile use-cases.
//!
//! Inbound adapters call this port with raw client input; implementations
//! validate, enforce uniqueness and talk to storage.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// CRUD use-cases over user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Validate `draft` and store it as a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Fetch one user.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Every live user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Apply the supplied fields of `draft` to an existing user, all or
    /// nothing.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove a user and return the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
