use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pin_reset_core::{PinCode, PinCodeStore, PinCodeStoreError, UserId};

/// In-memory PIN code store. Codes never expire.
#[derive(Default, Clone)]
pub struct HashMapPinCodeStore {
    codes: Arc<RwLock<HashMap<UserId, PinCode>>>,
}

impl HashMapPinCodeStore {
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl PinCodeStore for HashMapPinCodeStore {
    async fn store_code(&self, user_id: UserId, code: PinCode) -> Result<(), PinCodeStoreError> {
        let mut codes = self.codes.write().await;
        codes.insert(user_id, code);
        Ok(())
    }

    async fn get_code(&self, user_id: UserId) -> Result<PinCode, PinCodeStoreError> {
        let codes = self.codes.read().await;
        codes
            .get(&user_id)
            .cloned()
            .ok_or(PinCodeStoreError::UserNotFound)
    }
}
