use pin_reset_core::{PinCode, PinCodeStore, PinCodeStoreError, UserId};
use redis::{AsyncCommands, aio::MultiplexedConnection};

/// Redis-backed PIN code store; codes expire after `code_ttl` seconds.
///
/// `MultiplexedConnection` is a cheap handle over one pipelined connection,
/// so each call works on its own clone.
#[derive(Clone)]
pub struct RedisPinCodeStore {
    conn: MultiplexedConnection,
    code_ttl: u64,
}

impl RedisPinCodeStore {
    pub fn new(conn: MultiplexedConnection, code_ttl: u64) -> Self {
        Self { conn, code_ttl }
    }
}

#[async_trait::async_trait]
impl PinCodeStore for RedisPinCodeStore {
    #[tracing::instrument(name = "Storing PIN code in Redis", skip_all)]
    async fn store_code(&self, user_id: UserId, code: PinCode) -> Result<(), PinCodeStoreError> {
        let key = get_key(user_id);

        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(key, code.as_str(), self.code_ttl)
            .await
            .map_err(|e| PinCodeStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving PIN code from Redis", skip_all)]
    async fn get_code(&self, user_id: UserId) -> Result<PinCode, PinCodeStoreError> {
        let key = get_key(user_id);

        let mut conn = self.conn.clone();
        let code: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| PinCodeStoreError::UnexpectedError(e.to_string()))?;

        let code = code.ok_or(PinCodeStoreError::UserNotFound)?;
        PinCode::parse(code).map_err(|e| PinCodeStoreError::UnexpectedError(e.to_string()))
    }
}

const PIN_CODE_KEY_PREFIX: &str = "pin_code:";

fn get_key(user_id: UserId) -> String {
    format!("{}{}", PIN_CODE_KEY_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_prefixed_with_user_id() {
        assert_eq!(get_key(UserId::new(42)), "pin_code:42");
    }
}
