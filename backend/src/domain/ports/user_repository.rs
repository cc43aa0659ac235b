//! Port abstraction for user record storage.

use async_trait::async_trait;

use crate::domain::{Email, User, UserId, Username};

/// Failures raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// The backing table could not be read or written.
    #[error("user repository storage failed: {message}")]
    Storage { message: String },
    /// No further identifiers can be issued.
    #[error("user identifier space exhausted")]
    IdentifiersExhausted,
}

impl UserRepositoryError {
    /// Build a [`UserRepositoryError::Storage`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Storage for user records keyed by [`UserId`].
///
/// Adapters only store and fetch; uniqueness and identifier policy are
/// enforced by the caller while it holds the write lock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Reserve the next identifier. Identifiers are never handed out twice,
    /// even if the record they were reserved for is later deleted.
    async fn next_id(&self) -> Result<UserId, UserRepositoryError>;

    /// Store a new record under its identifier.
    async fn insert(&self, user: User) -> Result<(), UserRepositoryError>;

    /// Overwrite an existing record with the same identifier.
    async fn replace(&self, user: User) -> Result<(), UserRepositoryError>;

    /// Remove a record, returning it when it existed.
    async fn remove(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the record holding `username`, if any.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError>;

    /// Fetch the record holding `email` (case-sensitive), if any.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;
}
