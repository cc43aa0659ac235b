//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `ToSchema`; these mirrors describe their wire
//! shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A field failed its validation rule.
    #[schema(rename = "Validation error")]
    ValidationFailed,
    /// The request could not be interpreted.
    #[schema(rename = "Bad request")]
    BadRequest,
    /// No user holds the identifier.
    #[schema(rename = "User not found")]
    UserNotFound,
    /// No route matches the request.
    #[schema(rename = "Resource not found")]
    ResourceNotFound,
    /// Username or email already taken.
    #[schema(rename = "Conflict")]
    Conflict,
    /// Unexpected server fault.
    #[schema(rename = "Internal server error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::UserProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::UserProfile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserProfileSchema {
    /// Store-assigned identifier.
    #[schema(example = 1, minimum = 1)]
    id: u64,
    #[schema(example = "john_doe", min_length = 3, pattern = "^[A-Za-z0-9_]+$")]
    username: String,
    #[schema(example = "John")]
    first_name: String,
    #[schema(example = "Doe")]
    last_name: String,
    /// Age in years, `null` when unknown.
    #[schema(example = 30, minimum = 0, maximum = 150)]
    age: Option<u8>,
    /// ISO-8601 UTC creation instant.
    #[schema(example = "2023-01-15T10:30:00Z")]
    created_at: String,
}

/// OpenAPI schema for create and update request bodies.
///
/// Create requires the four string fields; update accepts any subset.
#[derive(ToSchema)]
#[schema(as = UserRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRequestSchema {
    #[schema(example = "alice")]
    username: Option<String>,
    #[schema(example = "alice@example.com")]
    email: Option<String>,
    #[schema(example = "Alice")]
    first_name: Option<String>,
    #[schema(example = "Wong")]
    last_name: Option<String>,
    #[schema(example = 28)]
    age: Option<i64>,
}
