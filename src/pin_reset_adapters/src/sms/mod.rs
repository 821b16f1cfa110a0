pub mod http_sms_client;
pub mod mock_sms_client;

pub use http_sms_client::HttpSmsClient;
pub use mock_sms_client::{MockSmsClient, SentSms};
