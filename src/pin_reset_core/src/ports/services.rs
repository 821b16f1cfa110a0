use async_trait::async_trait;
use thiserror::Error;

use crate::{
    domain::{phone_number::PhoneNumber, user::UserRecord},
    ports::repositories::PinCodeStoreError,
};

/// Port trait for the SMS delivery service
#[async_trait]
pub trait SmsClient: Send + Sync {
    async fn send_sms(&self, recipient: &PhoneNumber, content: &str) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("PIN code store error: {0}")]
    PinCodeStoreError(#[from] PinCodeStoreError),
    #[error("Failed to send SMS: {0}")]
    SmsError(String),
}

/// Generates a one-time code for a user and delivers it over the user's
/// registered contact channel.
#[async_trait]
pub trait VerificationCodeDispatcher: Send + Sync {
    async fn generate_and_send(&self, user: &UserRecord) -> Result<(), DispatchError>;
}
