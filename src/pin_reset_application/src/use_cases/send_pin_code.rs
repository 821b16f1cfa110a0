use async_trait::async_trait;
use pin_reset_core::{
    DispatchError, PinCode, PinCodeStore, SmsClient, UserRecord, VerificationCodeDispatcher,
};

/// Send PIN code use case - generates, stores and texts a one-time code
///
/// This is the production `VerificationCodeDispatcher`: the code is stored
/// before the SMS goes out, so any code a user receives can be verified.
#[derive(Clone)]
pub struct SendPinCodeUseCase<S, C>
where
    S: PinCodeStore,
    C: SmsClient,
{
    pin_code_store: S,
    sms_client: C,
}

impl<S, C> SendPinCodeUseCase<S, C>
where
    S: PinCodeStore,
    C: SmsClient,
{
    pub fn new(pin_code_store: S, sms_client: C) -> Self {
        Self {
            pin_code_store,
            sms_client,
        }
    }

    #[tracing::instrument(
        name = "SendPinCodeUseCase::execute",
        skip_all,
        fields(user_id = %user.id(), phone = %user.phone_number().masked())
    )]
    pub async fn execute(&self, user: &UserRecord) -> Result<(), DispatchError> {
        let code = PinCode::new();

        self.pin_code_store
            .store_code(user.id(), code.clone())
            .await?;

        self.sms_client
            .send_sms(user.phone_number(), &pin_code_message(&code))
            .await
            .map_err(DispatchError::SmsError)?;

        tracing::info!("PIN code sent");
        Ok(())
    }
}

#[async_trait]
impl<S, C> VerificationCodeDispatcher for SendPinCodeUseCase<S, C>
where
    S: PinCodeStore,
    C: SmsClient,
{
    async fn generate_and_send(&self, user: &UserRecord) -> Result<(), DispatchError> {
        self.execute(user).await
    }
}

fn pin_code_message(code: &PinCode) -> String {
    format!("Your password reset PIN code is {}", code.as_str())
}
