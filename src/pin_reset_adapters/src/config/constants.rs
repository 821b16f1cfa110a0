pub const ENV_PREFIX: &str = "PIN_RESET";
pub const SETTINGS_FILE: &str = "config/settings";

pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "PIN_RESET_ALLOWED_ORIGINS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const SMS_AUTH_TOKEN_ENV_VAR: &str = "SMS_AUTH_TOKEN";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const JWT_COOKIE_NAME: &str = "jwt";
    pub const JWT_TIME_TO_LIVE: i64 = 600;
    pub const PIN_CODE_TIME_TO_LIVE: u64 = 300;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;

    pub mod sms_client {
        pub const BASE_URL: &str = "https://sms.example.com/";
        pub const SENDER: &str = "PinReset";
        pub const TIMEOUT_IN_MILLIS: u64 = 10_000;
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod sms_client {
        use std::time::Duration;

        pub const SENDER: &str = "TestSender";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
