use pin_reset_core::{PhoneNumber, SmsClient};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

/// SMS gateway client speaking a JSON-over-HTTP API:
/// `POST {base_url}/messages` with a bearer token.
#[derive(Clone)]
pub struct HttpSmsClient {
    http_client: Client,
    base_url: String,
    sender: String,
    authorization_token: Secret<String>,
}

impl HttpSmsClient {
    pub fn new(
        base_url: String,
        sender: String,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl SmsClient for HttpSmsClient {
    #[tracing::instrument(name = "Sending SMS", skip_all, fields(recipient = %recipient.masked()))]
    async fn send_sms(&self, recipient: &PhoneNumber, content: &str) -> Result<(), String> {
        // A trailing slash keeps any path in the base url when joining.
        let base = Url::parse(&format!("{}/", self.base_url.trim_end_matches('/')))
            .map_err(|e| e.to_string())?;
        let url = base.join(MESSAGES_PATH).map_err(|e| e.to_string())?;

        let request_body = SendSmsRequest {
            from: &self.sender,
            to: recipient.as_ref().expose_secret(),
            body: content,
        };

        let request = self
            .http_client
            .post(url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body);

        request
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}

const MESSAGES_PATH: &str = "messages";

#[derive(serde::Serialize, Debug)]
struct SendSmsRequest<'a> {
    from: &'a str,
    to: &'a str,
    body: &'a str,
}
