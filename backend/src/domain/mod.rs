//! Domain primitives, ports and services.
//!
//! Purpose: define the user profile record, the rules every write must
//! satisfy, and the ports adapters plug into. Nothing here knows about HTTP.
//!
//! Public surface:
//! - User, UserProfile and the validated field types.
//! - UserDraft: raw client fields awaiting validation.
//! - Error / ErrorCode: transport agnostic failures.
//! - UserDirectoryService: the driving-port implementation.
//! - TraceId: per-request correlation identifier.

pub mod error;
pub mod ports;
mod time;
mod trace_id;
pub mod user;
mod user_directory_service;
mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::time::to_iso8601;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, AGE_MIN, Age, Email, NameField, NewUser, PersonName, USERNAME_MIN, User,
    UserChanges, UserId, UserProfile, UserValidationError, Username,
};
pub use self::user_directory_service::{EMAIL_TAKEN, USERNAME_TAKEN, UserDirectoryService};
pub use self::validation::{
    UserDraft, validate_age, validate_email, validate_name, validate_username,
};
