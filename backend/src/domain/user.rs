//! User profile record and its validated field types.
//!
//! Every field type validates on construction, so a [`User`] assembled from
//! them satisfies the write-time invariants by definition.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Serialize, Serializer};

use super::time::to_iso8601;

/// Minimum username length, counted in characters after trimming.
pub const USERNAME_MIN: usize = 3;
/// Youngest accepted age.
pub const AGE_MIN: i64 = 0;
/// Oldest accepted age.
pub const AGE_MAX: i64 = 150;

/// Which of the two name fields a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// `first_name`
    First,
    /// `last_name`
    Last,
}

impl NameField {
    /// Wire name of the field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::First => "first_name",
            Self::Last => "last_name",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::First => "First name",
            Self::Last => "Last name",
        }
    }
}

/// Validation failures for user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier is not a base-10 integer.
    InvalidUserId,
    /// Identifier is zero or negative.
    NonPositiveUserId,
    /// Username absent, `null` or empty.
    MissingUsername,
    /// Username sent as a non-string JSON value.
    UsernameNotText,
    /// Trimmed username shorter than `min` characters.
    UsernameTooShort {
        /// Minimum accepted length.
        min: usize,
    },
    /// Username contains characters outside `[A-Za-z0-9_]`.
    UsernameInvalidCharacters,
    /// Email absent, `null` or empty.
    MissingEmail,
    /// Email sent as a non-string JSON value.
    EmailNotText,
    /// Email does not match the address pattern.
    InvalidEmail,
    /// Name missing or blank after trimming.
    EmptyName {
        /// Which name was rejected.
        field: NameField,
    },
    /// Age is neither an integer nor an integer string.
    AgeNotANumber,
    /// Age outside the accepted range.
    AgeOutOfRange {
        /// Youngest accepted age.
        min: i64,
        /// Oldest accepted age.
        max: i64,
    },
}

impl UserValidationError {
    /// Wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidUserId | Self::NonPositiveUserId => "id",
            Self::MissingUsername
            | Self::UsernameNotText
            | Self::UsernameTooShort { .. }
            | Self::UsernameInvalidCharacters => "username",
            Self::MissingEmail | Self::EmailNotText | Self::InvalidEmail => "email",
            Self::EmptyName { field } => field.key(),
            Self::AgeNotANumber | Self::AgeOutOfRange { .. } => "age",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUserId => write!(f, "User ID must be a valid integer"),
            Self::NonPositiveUserId => write!(f, "User ID must be a positive integer"),
            Self::MissingUsername => write!(f, "Username is required"),
            Self::UsernameNotText => write!(f, "Username must be a string"),
            Self::UsernameTooShort { min } => {
                write!(f, "Username must be at least {min} characters long")
            }
            Self::UsernameInvalidCharacters => write!(
                f,
                "Username can only contain letters, numbers, and underscores"
            ),
            Self::MissingEmail => write!(f, "Email is required"),
            Self::EmailNotText => write!(f, "Email must be a string"),
            Self::InvalidEmail => write!(f, "Invalid email format"),
            Self::EmptyName { field } => write!(f, "{} cannot be empty", field.label()),
            Self::AgeNotANumber => write!(f, "Age must be a valid number"),
            Self::AgeOutOfRange { min, max } => write!(f, "Age must be between {min} and {max}"),
        }
    }
}

impl std::error::Error for UserValidationError {}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("pattern {pattern} failed to compile: {error}"))
}

fn username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile("^[A-Za-z0-9_]+$"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"))
}

/// Store-assigned identifier, always `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier, rejecting zero.
    pub const fn new(value: u64) -> Result<Self, UserValidationError> {
        if value == 0 {
            return Err(UserValidationError::NonPositiveUserId);
        }
        Ok(Self(value))
    }

    /// Parse a base-10 path segment.
    ///
    /// # Examples
    /// ```
    /// use profile_api::domain::{UserId, UserValidationError};
    ///
    /// assert_eq!(UserId::parse("7").map(UserId::get), Ok(7));
    /// assert_eq!(UserId::parse("abc"), Err(UserValidationError::InvalidUserId));
    /// assert_eq!(UserId::parse("-3"), Err(UserValidationError::NonPositiveUserId));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| UserValidationError::InvalidUserId)?;
        let value = u64::try_from(value).map_err(|_| UserValidationError::NonPositiveUserId)?;
        Self::new(value)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Login handle: trimmed, at least [`USERNAME_MIN`] characters of
/// `[A-Za-z0-9_]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and normalise a username.
    ///
    /// Only the empty string counts as missing; whitespace-only input is
    /// too short once trimmed.
    pub fn new(raw: &str) -> Result<Self, UserValidationError> {
        if raw.is_empty() {
            return Err(UserValidationError::MissingUsername);
        }
        let trimmed = raw.trim();
        if trimmed.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        if !username_regex().is_match(trimmed) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Contact address. Compared case-sensitively for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate an address against the local-part@domain.tld pattern.
    pub fn new(raw: &str) -> Result<Self, UserValidationError> {
        if raw.is_empty() {
            return Err(UserValidationError::MissingEmail);
        }
        if !email_regex().is_match(raw) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// First or last name, stored trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Validate the name supplied for `field`.
    pub fn new(field: NameField, raw: &str) -> Result<Self, UserValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName { field });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Age in whole years, within [`AGE_MIN`]..=[`AGE_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Age(u8);

impl Age {
    /// Range-check an age.
    pub fn new(years: i64) -> Result<Self, UserValidationError> {
        if !(AGE_MIN..=AGE_MAX).contains(&years) {
            return Err(UserValidationError::AgeOutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            });
        }
        u8::try_from(years)
            .map(Self)
            .map_err(|_| UserValidationError::AgeOutOfRange {
                min: AGE_MIN,
                max: AGE_MAX,
            })
    }

    /// Age in years.
    #[must_use]
    pub const fn years(self) -> u8 {
        self.0
    }
}

/// Validated fields for a user that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique login handle.
    pub username: Username,
    /// Unique contact address.
    pub email: Email,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Optional age in years.
    pub age: Option<Age>,
}

/// Validated partial update. `None` leaves a field untouched; for `age`,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement username.
    pub username: Option<Username>,
    /// Replacement email.
    pub email: Option<Email>,
    /// Replacement first name.
    pub first_name: Option<PersonName>,
    /// Replacement last name.
    pub last_name: Option<PersonName>,
    /// Replacement age; `Some(None)` clears it.
    pub age: Option<Option<Age>>,
}

impl UserChanges {
    /// True when nothing would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Stored user profile.
///
/// ## Invariants
/// - `id` and `created_at` never change after insertion.
/// - all other fields went through their validating constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    first_name: PersonName,
    last_name: PersonName,
    age: Option<Age>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a record from validated fields.
    #[must_use]
    pub fn new(id: UserId, fields: NewUser, created_at: DateTime<Utc>) -> Self {
        let NewUser {
            username,
            email,
            first_name,
            last_name,
            age,
        } = fields;
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            age,
            created_at,
        }
    }

    /// Copy of this record with `changes` applied. Identity and creation time
    /// are carried over.
    #[must_use]
    pub fn with_changes(&self, changes: UserChanges) -> Self {
        let UserChanges {
            username,
            email,
            first_name,
            last_name,
            age,
        } = changes;
        Self {
            id: self.id,
            username: username.unwrap_or_else(|| self.username.clone()),
            email: email.unwrap_or_else(|| self.email.clone()),
            first_name: first_name.unwrap_or_else(|| self.first_name.clone()),
            last_name: last_name.unwrap_or_else(|| self.last_name.clone()),
            age: age.unwrap_or(self.age),
            created_at: self.created_at,
        }
    }

    /// Identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Login handle.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Contact address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Given name.
    #[must_use]
    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Age, if known.
    #[must_use]
    pub const fn age(&self) -> Option<Age> {
        self.age
    }

    /// Creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Public view of the record, which never includes the email.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            created_at: self.created_at,
        }
    }
}

/// Client-visible shape of a user.
///
/// Serialises with snake_case keys; `age` is `null` when unknown and
/// `created_at` is ISO-8601 UTC with a `Z` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Login handle.
    pub username: Username,
    /// Given name.
    pub first_name: PersonName,
    /// Family name.
    pub last_name: PersonName,
    /// Age in years, if known.
    pub age: Option<Age>,
    /// Creation instant.
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso8601(*value))
}
