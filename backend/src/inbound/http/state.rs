//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` so they depend only on the
//! [`UserDirectory`] port and a clock, never on a concrete store.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User profile operations.
    pub users: Arc<dyn UserDirectory>,
    /// Source of response timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Bundle the user directory with the clock used for response timestamps.
    pub fn new(users: Arc<dyn UserDirectory>, clock: Arc<dyn Clock>) -> Self {
        Self { users, clock }
    }
}
