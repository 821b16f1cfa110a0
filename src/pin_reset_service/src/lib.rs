pub mod helpers;
pub mod service;
pub mod telemetry;

pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use service::PinResetService;
pub use telemetry::init_tracing;
