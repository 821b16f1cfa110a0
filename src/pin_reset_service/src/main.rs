use color_eyre::eyre::Result;
use pin_reset_adapters::{
    auth_validation::{JwtAuthConfig, JwtSessionAuthenticator},
    config::ServiceSettings,
    persistence::{PostgresUserDirectory, RedisPinCodeStore},
    sms::HttpSmsClient,
};
use pin_reset_application::SendPinCodeUseCase;
use pin_reset_service::{PinResetService, configure_postgresql, configure_redis, init_tracing};
use reqwest::Client as HttpClient;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = ServiceSettings::load()?;

    let pg_pool = configure_postgresql(&settings).await?;
    let redis_conn = configure_redis(&settings).await?;

    let user_directory = PostgresUserDirectory::new(pg_pool);
    let pin_code_store = RedisPinCodeStore::new(redis_conn, settings.pin_code.time_to_live);

    let http_client = HttpClient::builder()
        .timeout(settings.sms_client.timeout())
        .build()?;

    let sms_client = HttpSmsClient::new(
        settings.sms_client.base_url.clone(),
        settings.sms_client.sender.clone(),
        settings.sms_client.auth_token.clone(),
        http_client,
    );

    let dispatcher = SendPinCodeUseCase::new(pin_code_store, sms_client);
    let authenticator = JwtSessionAuthenticator::new(JwtAuthConfig::from(&settings.auth.jwt));

    let service = PinResetService::new(user_directory, dispatcher, authenticator);

    let allowed_origins = settings.app.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = TcpListener::bind(&settings.app.address).await?;
    tracing::info!("Starting PIN reset service...");

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
