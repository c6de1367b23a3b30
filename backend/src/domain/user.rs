//! User entity and validated value types.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// Validation errors raised when constructing user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Email is empty once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email does not satisfy the address grammar.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// Username is empty once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address satisfying a valid-email grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated input for creating a user.
///
/// No uniqueness constraint applies to the username or email; the store keeps
/// every document it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: EmailAddress,
    full_name: Option<String>,
}

impl NewUser {
    /// Validate and construct the creation input.
    pub fn new(
        username: impl Into<String>,
        email: EmailAddress,
        full_name: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self {
            username,
            email,
            full_name,
        })
    }

    /// Requested username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Requested email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Requested full name, when given.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }
}

/// Stored user in its canonical persisted form.
///
/// ## Invariants
/// - `deactivated_at` is `Some` iff `active` is `false`.
/// - The identifier is store-assigned and never reused after deactivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: RecordId,
    username: String,
    email: EmailAddress,
    full_name: Option<String>,
    active: bool,
    deactivated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a [`User`] from components already validated by the store layer.
    pub fn new(
        id: RecordId,
        username: String,
        email: EmailAddress,
        full_name: Option<String>,
        active: bool,
        deactivated_at: Option<DateTime<Utc>>,
    ) -> Self {
        debug_assert_eq!(active, deactivated_at.is_none());
        Self {
            id,
            username,
            email,
            full_name,
            active,
            deactivated_at,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Username as persisted.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Email address as persisted.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Full name, when present.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// Whether the user is active (not soft-deleted).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the user was deactivated, for inactive users.
    pub fn deactivated_at(&self) -> Option<DateTime<Utc>> {
        self.deactivated_at
    }
}
