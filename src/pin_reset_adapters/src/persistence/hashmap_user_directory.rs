use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use pin_reset_core::{UserDirectory, UserDirectoryError, UserRecord, Username};

#[derive(Default, Clone)]
pub struct HashMapUserDirectory {
    users: Arc<RwLock<HashMap<Username, UserRecord>>>,
}

impl HashMapUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace the record for `user.username()`.
    pub async fn add_user(&self, user: UserRecord) {
        let mut users = self.users.write().await;
        users.insert(user.username().clone(), user);
    }
}

#[async_trait::async_trait]
impl UserDirectory for HashMapUserDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserRecord>, UserDirectoryError> {
        let users = self.users.read().await;
        Ok(users.get(username).cloned())
    }
}
