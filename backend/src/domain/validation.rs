//! Field validators for raw client input.
//!
//! Each validator takes the JSON value a client sent for one field (or `None`
//! when the key was absent) and returns the normalised domain value. They are
//! pure: uniqueness needs the store and lives in the user directory service.

use serde_json::{Number, Value};

use super::user::{
    Age, AGE_MAX, AGE_MIN, Email, NameField, NewUser, PersonName, UserChanges, Username,
    UserValidationError,
};

/// Unvalidated user fields as received from a client.
///
/// `None` means the key was absent; `Some(Value::Null)` means it was sent as
/// `null`. The distinction matters for partial updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    /// Raw `username`.
    pub username: Option<Value>,
    /// Raw `email`.
    pub email: Option<Value>,
    /// Raw `first_name`.
    pub first_name: Option<Value>,
    /// Raw `last_name`.
    pub last_name: Option<Value>,
    /// Raw `age`.
    pub age: Option<Value>,
}

impl UserDraft {
    /// Validate every field for a create, first failure wins.
    ///
    /// Fields are checked in the fixed order username, email, age, first
    /// name, last name.
    pub fn validate_new(&self) -> Result<NewUser, UserValidationError> {
        let username = validate_username(self.username.as_ref())?;
        let email = validate_email(self.email.as_ref())?;
        let age = validate_age(self.age.as_ref())?;
        let first_name = validate_name(NameField::First, self.first_name.as_ref())?;
        let last_name = validate_name(NameField::Last, self.last_name.as_ref())?;
        Ok(NewUser {
            username,
            email,
            first_name,
            last_name,
            age,
        })
    }

    /// Validate only the supplied fields for a partial update.
    ///
    /// Order: username, email, first name, last name, age.
    pub fn validate_changes(&self) -> Result<UserChanges, UserValidationError> {
        Ok(UserChanges {
            username: self
                .username
                .as_ref()
                .map(|raw| validate_username(Some(raw)))
                .transpose()?,
            email: self
                .email
                .as_ref()
                .map(|raw| validate_email(Some(raw)))
                .transpose()?,
            first_name: self
                .first_name
                .as_ref()
                .map(|raw| validate_name(NameField::First, Some(raw)))
                .transpose()?,
            last_name: self
                .last_name
                .as_ref()
                .map(|raw| validate_name(NameField::Last, Some(raw)))
                .transpose()?,
            age: self
                .age
                .as_ref()
                .map(|raw| validate_age(Some(raw)))
                .transpose()?,
        })
    }
}

/// Required; trimmed, at least three characters, `[A-Za-z0-9_]` only.
pub fn validate_username(raw: Option<&Value>) -> Result<Username, UserValidationError> {
    match raw {
        None | Some(Value::Null) => Err(UserValidationError::MissingUsername),
        Some(Value::String(text)) => Username::new(text),
        Some(_) => Err(UserValidationError::UsernameNotText),
    }
}

/// Required; must match the local-part@domain.tld pattern.
pub fn validate_email(raw: Option<&Value>) -> Result<Email, UserValidationError> {
    match raw {
        None | Some(Value::Null) => Err(UserValidationError::MissingEmail),
        Some(Value::String(text)) => Email::new(text),
        Some(_) => Err(UserValidationError::EmailNotText),
    }
}

/// Required; non-empty after trimming.
pub fn validate_name(
    field: NameField,
    raw: Option<&Value>,
) -> Result<PersonName, UserValidationError> {
    match raw {
        Some(Value::String(text)) => PersonName::new(field, text),
        _ => Err(UserValidationError::EmptyName { field }),
    }
}

/// Optional; an integer (or integer string) between 0 and 150.
pub fn validate_age(raw: Option<&Value>) -> Result<Option<Age>, UserValidationError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => age_from_number(number).map(Some),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| UserValidationError::AgeNotANumber)
            .and_then(Age::new)
            .map(Some),
        Some(_) => Err(UserValidationError::AgeNotANumber),
    }
}

fn age_from_number(number: &Number) -> Result<Age, UserValidationError> {
    if let Some(years) = number.as_i64() {
        return Age::new(years);
    }
    if number.as_u64().is_some() {
        return Err(UserValidationError::AgeOutOfRange {
            min: AGE_MIN,
            max: AGE_MAX,
        });
    }
    Err(UserValidationError::AgeNotANumber)
}
