use std::fmt;

use thiserror::Error;

const MAX_USERNAME_LENGTH: usize = 150;

#[derive(Debug, Error, PartialEq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,
    #[error("Username must be at most {MAX_USERNAME_LENGTH} characters")]
    TooLong,
    #[error("Username must not contain whitespace or control characters")]
    InvalidCharacter,
}

/// Account name as stored in the user directory.
///
/// Comparison is exact: no case folding or trimming is applied, so the
/// value a session carries must match the directory entry byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn parse(username: impl Into<String>) -> Result<Self, UsernameError> {
        let username = username.into();

        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(UsernameError::TooLong);
        }
        if username
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(UsernameError::InvalidCharacter);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
