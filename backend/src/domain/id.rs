//! Record identifier codec.
//!
//! The document store assigns each document an opaque object identifier whose
//! external form is a fixed 24-lowercase-hex token. [`RecordId`] validates that
//! grammar on the way in and renders it losslessly on the way out. Callers
//! performing lookups treat a failed decode as "not found"; callers performing
//! mutations treat it as a no-effect failure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the external identifier token in hex characters.
pub const RECORD_ID_LEN: usize = 24;

/// Validation errors returned by [`RecordId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The token is not exactly [`RECORD_ID_LEN`] characters long.
    #[error("record id must be exactly {RECORD_ID_LEN} characters")]
    InvalidLength,
    /// The token contains characters outside the lowercase hex alphabet.
    #[error("record id must contain only lowercase hexadecimal characters")]
    InvalidCharacters,
}

/// Validated external identifier for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and construct a [`RecordId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, IdError> {
        if id.len() != RECORD_ID_LEN {
            return Err(IdError::InvalidLength);
        }
        let lowercase_hex = id
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !lowercase_hex {
            return Err(IdError::InvalidCharacters);
        }
        Ok(Self(id))
    }

    /// External string form of the identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl std::str::FromStr for RecordId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
