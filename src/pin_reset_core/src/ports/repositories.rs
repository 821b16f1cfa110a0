use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    pin_code::PinCode,
    user::{UserId, UserRecord},
    username::Username,
};

// UserDirectory port trait and errors
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserDirectoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Read-only access to user records.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(None)` when no account carries this username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserDirectoryError>;
}

// PinCodeStore port trait and errors
#[derive(Debug, Error)]
pub enum PinCodeStoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PinCodeStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait PinCodeStore: Send + Sync {
    /// Replaces any code previously stored for the user.
    async fn store_code(&self, user_id: UserId, code: PinCode) -> Result<(), PinCodeStoreError>;

    async fn get_code(&self, user_id: UserId) -> Result<PinCode, PinCodeStoreError>;
}
