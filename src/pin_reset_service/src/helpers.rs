use pin_reset_adapters::config::ServiceSettings;
use redis::{Client, RedisResult, aio::MultiplexedConnection};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool from the settings and run all
/// pending migrations.
pub async fn configure_postgresql(settings: &ServiceSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(
        settings.postgres.url.expose_secret(),
        settings.postgres.max_connections,
    )
    .await?;

    sqlx::migrate!().run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Open a multiplexed async Redis connection to the configured host.
pub async fn configure_redis(settings: &ServiceSettings) -> RedisResult<MultiplexedConnection> {
    get_redis_client(&settings.redis.host_name)?
        .get_multiplexed_async_connection()
        .await
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
