use std::sync::Arc;

use pin_reset_core::{PhoneNumber, SmsClient};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub recipient: String,
    pub content: String,
}

/// Records messages instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct MockSmsClient {
    sent: Arc<RwLock<Vec<SentSms>>>,
}

impl MockSmsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_messages(&self) -> Vec<SentSms> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl SmsClient for MockSmsClient {
    async fn send_sms(&self, recipient: &PhoneNumber, content: &str) -> Result<(), String> {
        self.sent.write().await.push(SentSms {
            recipient: recipient.as_ref().expose_secret().clone(),
            content: content.to_string(),
        });
        Ok(())
    }
}
