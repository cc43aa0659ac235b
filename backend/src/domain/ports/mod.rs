//! Domain ports for the hexagonal boundary.
//!
//! [`UserDirectory`] is the driving port HTTP handlers call;
//! [`UserRepository`] is the driven port storage adapters implement.

mod user_directory;
mod user_repository;

#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
