use std::time::Duration;

use pin_reset_adapters::persistence::RedisPinCodeStore;
use pin_reset_core::{PinCode, PinCodeStore, PinCodeStoreError, UserId};
use pin_reset_service::get_redis_client;
use testcontainers_modules::redis::{REDIS_PORT, Redis};
use testcontainers_modules::testcontainers::runners::AsyncRunner;

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn should_store_overwrite_and_expire_codes_in_redis() {
    let container = Redis::default().start().await.unwrap();
    let port = container.get_host_port_ipv4(REDIS_PORT).await.unwrap();

    let conn = get_redis_client(&format!("127.0.0.1:{port}"))
        .unwrap()
        .get_multiplexed_async_connection()
        .await
        .unwrap();

    let store = RedisPinCodeStore::new(conn.clone(), 300);
    let user_id = UserId::new(7);

    assert_eq!(
        store.get_code(user_id).await.unwrap_err(),
        PinCodeStoreError::UserNotFound
    );

    let first = PinCode::parse("123456".to_string()).unwrap();
    store.store_code(user_id, first.clone()).await.unwrap();
    assert_eq!(store.get_code(user_id).await.unwrap(), first);

    let second = PinCode::parse("654321".to_string()).unwrap();
    store.store_code(user_id, second.clone()).await.unwrap();
    assert_eq!(store.get_code(user_id).await.unwrap(), second);

    let short_lived = RedisPinCodeStore::new(conn, 1);
    let other_user = UserId::new(8);
    short_lived
        .store_code(other_user, first.clone())
        .await
        .unwrap();
    assert_eq!(short_lived.get_code(other_user).await.unwrap(), first);

    tokio::time::sleep(Duration::from_millis(2_100)).await;

    assert_eq!(
        short_lived.get_code(other_user).await.unwrap_err(),
        PinCodeStoreError::UserNotFound
    );
}
