use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::{Deserialize, Deserializer};

use crate::auth_validation::JwtAuthConfig;

use super::constants::{ENV_PREFIX, SETTINGS_FILE, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub app: AppSettings,
    pub auth: AuthSettings,
    pub postgres: PostgresSettings,
    pub redis: RedisSettings,
    pub sms_client: SmsClientSettings,
    pub pin_code: PinCodeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub cookie_name: String,
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

impl From<&JwtSettings> for JwtAuthConfig {
    fn from(settings: &JwtSettings) -> Self {
        JwtAuthConfig {
            jwt_cookie_name: settings.cookie_name.clone(),
            jwt_secret: settings.secret.clone(),
            token_ttl_in_seconds: settings.time_to_live,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmsClientSettings {
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl SmsClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PinCodeSettings {
    /// Seconds a stored PIN code stays valid
    pub time_to_live: u64,
}

impl ServiceSettings {
    /// Load settings from defaults, an optional `config/settings.*` file and
    /// the environment (`PIN_RESET__SECTION__KEY`), in increasing precedence.
    ///
    /// The conventional variables `JWT_SECRET`, `DATABASE_URL`,
    /// `REDIS_HOST_NAME`, `SMS_AUTH_TOKEN` and `PIN_RESET_ALLOWED_ORIGINS`
    /// override everything else. A `.env` file is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("auth.jwt.cookie_name", prod::JWT_COOKIE_NAME)?
            .set_default("auth.jwt.time_to_live", prod::JWT_TIME_TO_LIVE)?
            .set_default(
                "postgres.max_connections",
                i64::from(prod::POSTGRES_MAX_CONNECTIONS),
            )?
            .set_default("redis.host_name", "127.0.0.1")?
            .set_default("sms_client.base_url", prod::sms_client::BASE_URL)?
            .set_default("sms_client.sender", prod::sms_client::SENDER)?
            .set_default(
                "sms_client.timeout_in_millis",
                prod::sms_client::TIMEOUT_IN_MILLIS as i64,
            )?
            .set_default("pin_code.time_to_live", prod::PIN_CODE_TIME_TO_LIVE as i64)?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("auth.jwt.secret", std::env::var(env::JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("postgres.url", std::env::var(env::DATABASE_URL_ENV_VAR).ok())?
            .set_override_option(
                "redis.host_name",
                std::env::var(env::REDIS_HOST_NAME_ENV_VAR).ok(),
            )?
            .set_override_option(
                "sms_client.auth_token",
                std::env::var(env::SMS_AUTH_TOKEN_ENV_VAR).ok(),
            )?
            .set_override_option(
                "app.allowed_origins",
                std::env::var(env::ALLOWED_ORIGINS_ENV_VAR).ok(),
            )?
            .build()?
            .try_deserialize()
    }
}

/// CORS origins, configured as a comma-separated list.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn parse(origins: &str) -> Self {
        Self(
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .filter_map(|origin| HeaderValue::from_str(origin).ok())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for AllowedOrigins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let origins = String::deserialize(deserializer)?;
        Ok(Self::parse(&origins))
    }
}
