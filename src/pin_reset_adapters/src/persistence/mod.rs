pub mod hashmap_pin_code_store;
pub mod hashmap_user_directory;
pub mod postgres_user_directory;
pub mod redis_pin_code_store;

pub use hashmap_pin_code_store::HashMapPinCodeStore;
pub use hashmap_user_directory::HashMapUserDirectory;
pub use postgres_user_directory::PostgresUserDirectory;
pub use redis_pin_code_store::RedisPinCodeStore;
