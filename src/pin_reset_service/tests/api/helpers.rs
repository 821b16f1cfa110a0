use pin_reset_adapters::{
    auth_validation::{JwtAuthConfig, JwtSessionAuthenticator, generate_session_token},
    config::{prod, test},
    persistence::{HashMapPinCodeStore, HashMapUserDirectory},
    sms::MockSmsClient,
};
use pin_reset_application::SendPinCodeUseCase;
use pin_reset_core::{PhoneNumber, UserId, UserRecord, UserRole, Username};
use pin_reset_service::PinResetService;
use secrecy::Secret;
use serde::Serialize;

pub const TEST_JWT_SECRET: &str = "test-secret-with-enough-entropy-for-hs256";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_directory: HashMapUserDirectory,
    pub pin_code_store: HashMapPinCodeStore,
    pub sms_client: MockSmsClient,
    pub jwt_config: JwtAuthConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_directory = HashMapUserDirectory::new();
        let pin_code_store = HashMapPinCodeStore::new();
        let sms_client = MockSmsClient::new();

        let jwt_config = JwtAuthConfig {
            jwt_cookie_name: prod::JWT_COOKIE_NAME.to_string(),
            jwt_secret: Secret::from(TEST_JWT_SECRET.to_string()),
            token_ttl_in_seconds: prod::JWT_TIME_TO_LIVE,
        };

        let dispatcher = SendPinCodeUseCase::new(pin_code_store.clone(), sms_client.clone());
        let service = PinResetService::new(
            user_directory.clone(),
            dispatcher,
            JwtSessionAuthenticator::new(jwt_config.clone()),
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
            user_directory,
            pin_code_store,
            sms_client,
            jwt_config,
        }
    }

    pub async fn add_user(&self, id: i64, username: &str, phone: &str, role: UserRole) -> UserRecord {
        let user = UserRecord::new(
            UserId::new(id),
            Username::parse(username).unwrap(),
            PhoneNumber::parse(Secret::from(phone.to_string())).unwrap(),
            role,
            "Test".to_string(),
            "User".to_string(),
        );
        self.user_directory.add_user(user.clone()).await;
        user
    }

    pub fn token_for(&self, username: &str) -> String {
        generate_session_token(
            &Username::parse(username).unwrap(),
            self.jwt_config.token_ttl_in_seconds,
            self.jwt_config.as_bytes(),
        )
        .unwrap()
    }

    pub async fn post_reset_password<Body>(&self, token: Option<&str>, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        let mut request = self
            .http_client
            .post(format!("{}/reset-password", &self.address))
            .json(body);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request.send().await.expect("Failed to execute request")
    }
}
