//! Domain-level error type.
//!
//! Errors are transport agnostic: the HTTP adapter decides which status code
//! and envelope each [`ErrorCode`] maps to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;
use super::UserValidationError;

/// Failure category. The serialised form is the client-facing category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A field failed its validation rule.
    #[serde(rename = "Validation error")]
    ValidationFailed,
    /// The request itself is unusable (wrong media type, missing fields).
    #[serde(rename = "Bad request")]
    BadRequest,
    /// No live user holds the requested identifier.
    #[serde(rename = "User not found")]
    UserNotFound,
    /// No route matches the request.
    #[serde(rename = "Resource not found")]
    ResourceNotFound,
    /// A uniqueness rule would be violated.
    #[serde(rename = "Conflict")]
    Conflict,
    /// Unexpected fault; never surfaced with detail.
    #[serde(rename = "Internal server error")]
    InternalError,
}

impl ErrorCode {
    /// Category label used in error envelopes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation error",
            Self::BadRequest => "Bad request",
            Self::UserNotFound => "User not found",
            Self::ResourceNotFound => "Resource not found",
            Self::Conflict => "Conflict",
            Self::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain error payload.
///
/// Construction captures the ambient [`TraceId`] so adapters can correlate the
/// failure with request logs.
///
/// # Examples
/// ```
/// use profile_api::domain::{Error, ErrorCode};
///
/// let err = Error::user_not_found(999);
/// assert_eq!(err.code(), ErrorCode::UserNotFound);
/// assert_eq!(err.message(), "User with ID 999 does not exist");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with an explicit category.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Override the captured trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Failure category.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable detail.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier captured at construction, if any.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// A field failed validation.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// The request could not be interpreted.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// No live user for `id`.
    pub fn user_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::UserNotFound,
            format!("User with ID {id} does not exist"),
        )
    }

    /// No route for the request.
    #[must_use]
    pub fn resource_not_found() -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            "The requested resource could not be found",
        )
    }

    /// Uniqueness violation.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Unexpected fault. The message is for logs only.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        Self::validation(value.to_string())
    }
}
