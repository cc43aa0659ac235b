//! User directory domain service.
//!
//! Implements the [`UserDirectory`] driving port on top of any
//! [`UserRepository`]. All writes run under one async mutex so the
//! uniqueness checks and the write that follows them see the same table.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::domain::ports::{UserDirectory, UserRepository, UserRepositoryError};
use crate::domain::{Email, Error, User, UserDraft, UserId, Username};

/// Conflict message for a taken username.
pub const USERNAME_TAKEN: &str = "Username already exists";
/// Conflict message for a taken email.
pub const EMAIL_TAKEN: &str = "Email already exists";

/// Service implementing [`UserDirectory`].
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    writes: Mutex<()>,
}

impl<R> UserDirectoryService<R> {
    /// Create a service over `repository`, stamping records with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            writes: Mutex::new(()),
        }
    }
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    fn map_repository_error(err: UserRepositoryError) -> Error {
        error!(error = %err, "user repository failure");
        Error::internal(format!("user repository error: {err}"))
    }

    async fn load(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::user_not_found(id))
    }

    /// Reject `username` when a record other than `owner` holds it.
    async fn ensure_username_free(
        &self,
        username: &Username,
        owner: Option<UserId>,
    ) -> Result<(), Error> {
        let holder = self
            .repository
            .find_by_username(username)
            .await
            .map_err(Self::map_repository_error)?;
        match holder {
            Some(user) if Some(user.id()) != owner => {
                debug!(%username, "username already taken");
                Err(Error::conflict(USERNAME_TAKEN))
            }
            _ => Ok(()),
        }
    }

    /// Reject `email` when a record other than `owner` holds it.
    async fn ensure_email_free(&self, email: &Email, owner: Option<UserId>) -> Result<(), Error> {
        let holder = self
            .repository
            .find_by_email(email)
            .await
            .map_err(Self::map_repository_error)?;
        match holder {
            Some(user) if Some(user.id()) != owner => {
                debug!("email already taken");
                Err(Error::conflict(EMAIL_TAKEN))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let fields = draft.validate_new().inspect_err(|err| {
            debug!(field = err.field(), reason = %err, "rejected user create");
        })?;

        let _guard = self.writes.lock().await;
        self.ensure_username_free(&fields.username, None).await?;
        self.ensure_email_free(&fields.email, None).await?;

        let id = self
            .repository
            .next_id()
            .await
            .map_err(Self::map_repository_error)?;
        let user = User::new(id, fields, self.clock.utc());
        self.repository
            .insert(user.clone())
            .await
            .map_err(Self::map_repository_error)?;

        info!(user_id = %id, username = %user.username(), "user created");
        Ok(user)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.load(id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let _guard = self.writes.lock().await;
        let current = self.load(id).await?;
        let changes = draft.validate_changes().inspect_err(|err| {
            debug!(user_id = %id, field = err.field(), reason = %err, "rejected user update");
        })?;

        if let Some(username) = &changes.username {
            self.ensure_username_free(username, Some(id)).await?;
        }
        if let Some(email) = &changes.email {
            self.ensure_email_free(email, Some(id)).await?;
        }
        if changes.is_empty() {
            return Ok(current);
        }

        let updated = current.with_changes(changes);
        self.repository
            .replace(updated.clone())
            .await
            .map_err(Self::map_repository_error)?;

        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let _guard = self.writes.lock().await;
        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::user_not_found(id))?;

        info!(user_id = %id, "user deleted");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "user_directory_service_tests.rs"]
mod tests;
