//! Start-up seeding of sample users.
//!
//! Seeds go through [`UserDirectory::create_user`] so they obey the same
//! validation and uniqueness rules as client writes.

use serde_json::json;
use tracing::info;

use crate::domain::ports::UserDirectory;
use crate::domain::{Error, UserDraft};

fn sample(username: &str, email: &str, first: &str, last: &str, age: u8) -> UserDraft {
    UserDraft {
        username: Some(json!(username)),
        email: Some(json!(email)),
        first_name: Some(json!(first)),
        last_name: Some(json!(last)),
        age: Some(json!(age)),
    }
}

/// The three sample users, in insertion order.
pub fn sample_users() -> Vec<UserDraft> {
    vec![
        sample("john_doe", "john.doe@example.com", "John", "Doe", 30),
        sample("jane_smith", "jane.smith@example.com", "Jane", "Smith", 28),
        sample("bob_johnson", "bob.johnson@example.com", "Bob", "Johnson", 35),
    ]
}

/// Insert the sample users when `enabled`; returns how many were created.
///
/// # Errors
/// Propagates the first create failure, e.g. a conflict when the store
/// already holds one of the sample usernames.
pub async fn seed_example_data(directory: &dyn UserDirectory, enabled: bool) -> Result<usize, Error> {
    if !enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(0);
    }
    let mut created = 0;
    for draft in sample_users() {
        directory.create_user(draft).await?;
        created += 1;
    }
    info!(count = created, "example data seeded");
    Ok(created)
}
