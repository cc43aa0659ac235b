//! In-memory user repository.
//!
//! Records live in a `BTreeMap` keyed by identifier, so iteration order is
//! creation order. The identifier counter is kept separately from the map
//! and only ever moves forward.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{Email, User, UserId, Username};

#[derive(Debug, Default)]
struct UserTable {
    records: BTreeMap<UserId, User>,
    last_id: u64,
}

/// Process-local [`UserRepository`].
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

fn poisoned<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::storage("user table lock poisoned")
}

impl InMemoryUserRepository {
    /// Empty repository; the first identifier issued is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, UserTable>, UserRepositoryError> {
        self.table.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, UserTable>, UserRepositoryError> {
        self.table.write().map_err(poisoned)
    }

    fn find_where(
        &self,
        predicate: impl Fn(&User) -> bool,
    ) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.read()?.records.values().find(|user| predicate(*user)).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn next_id(&self) -> Result<UserId, UserRepositoryError> {
        let mut table = self.write()?;
        let next = table
            .last_id
            .checked_add(1)
            .ok_or(UserRepositoryError::IdentifiersExhausted)?;
        let id = UserId::new(next).map_err(|err| UserRepositoryError::storage(err.to_string()))?;
        table.last_id = next;
        Ok(id)
    }

    async fn insert(&self, user: User) -> Result<(), UserRepositoryError> {
        let mut table = self.write()?;
        if table.records.contains_key(&user.id()) {
            return Err(UserRepositoryError::storage(format!(
                "user {} already stored",
                user.id()
            )));
        }
        table.last_id = table.last_id.max(user.id().get());
        table.records.insert(user.id(), user);
        Ok(())
    }

    async fn replace(&self, user: User) -> Result<(), UserRepositoryError> {
        let mut table = self.write()?;
        match table.records.get_mut(&user.id()) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(UserRepositoryError::storage(format!(
                "user {} is not stored",
                user.id()
            ))),
        }
    }

    async fn remove(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.write()?.records.remove(&id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        self.find_where(|user| user.username() == username)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError> {
        self.find_where(|user| user.email() == email)
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.read()?.records.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NameField, NewUser, PersonName};
    use chrono::Utc;
    use rstest::{fixture, rstest};

    fn user(id: UserId, username: &str, email: &str) -> User {
        let fields = NewUser {
            username: Username::new(username).expect("username"),
            email: Email::new(email).expect("email"),
            first_name: PersonName::new(NameField::First, "Ada").expect("first name"),
            last_name: PersonName::new(NameField::Last, "King").expect("last name"),
            age: None,
        };
        User::new(id, fields, Utc::now())
    }

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    async fn store(repo: &InMemoryUserRepository, username: &str) -> UserId {
        let id = repo.next_id().await.expect("id");
        repo.insert(user(id, username, &format!("{username}@example.com")))
            .await
            .expect("insert");
        id
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_start_at_one_and_increase(repo: InMemoryUserRepository) {
        assert_eq!(store(&repo, "first").await.get(), 1);
        assert_eq!(store(&repo, "second").await.get(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_are_not_reused_after_deleting_the_highest(repo: InMemoryUserRepository) {
        store(&repo, "first").await;
        let second = store(&repo, "second").await;
        repo.remove(second).await.expect("remove");

        assert_eq!(store(&repo, "third").await.get(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn list_follows_identifier_order(repo: InMemoryUserRepository) {
        for name in ["carol", "alice", "bob"] {
            store(&repo, name).await;
        }
        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|user| user.username().to_string())
            .collect();
        assert_eq!(names, ["carol", "alice", "bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn email_lookup_is_case_sensitive(repo: InMemoryUserRepository) {
        store(&repo, "alice").await;
        let exact = Email::new("alice@example.com").expect("email");
        let shouted = Email::new("ALICE@example.com").expect("email");

        assert!(repo.find_by_email(&exact).await.expect("lookup").is_some());
        assert!(repo.find_by_email(&shouted).await.expect("lookup").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn replace_requires_existing_record(repo: InMemoryUserRepository) {
        let ghost = user(UserId::new(9).expect("id"), "ghost", "ghost@example.com");
        let err = repo.replace(ghost).await.expect_err("missing record");
        assert!(matches!(err, UserRepositoryError::Storage { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn remove_missing_returns_none(repo: InMemoryUserRepository) {
        let removed = repo.remove(UserId::new(1).expect("id")).await.expect("remove");
        assert!(removed.is_none());
    }
}
