use pin_reset_core::{
    AuthenticatedSession, DispatchError, UserDirectory, UserDirectoryError,
    VerificationCodeDispatcher,
};

/// Error types for the request password reset use case
///
/// None of the variants carry data about the target account, so no
/// rendering of these errors can expose it.
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Requested username does not match the current session")]
    IdentityMismatch,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Only customers can reset their password through this feature")]
    RoleNotEligible,
    #[error("User directory error: {0}")]
    UserDirectoryError(#[from] UserDirectoryError),
    #[error("Failed to dispatch PIN code: {0}")]
    DispatchError(#[from] DispatchError),
}

/// Request password reset use case - sends a PIN code to the session owner
pub struct RequestPasswordResetUseCase<D, V>
where
    D: UserDirectory,
    V: VerificationCodeDispatcher,
{
    user_directory: D,
    dispatcher: V,
}

impl<D, V> RequestPasswordResetUseCase<D, V>
where
    D: UserDirectory,
    V: VerificationCodeDispatcher,
{
    pub fn new(user_directory: D, dispatcher: V) -> Self {
        Self {
            user_directory,
            dispatcher,
        }
    }

    /// Execute the request password reset use case
    ///
    /// # Arguments
    /// * `session` - Identity of the caller
    /// * `requested_username` - Username from the request body, as sent
    ///
    /// # Returns
    /// Ok(()) once a PIN code has been dispatched, or RequestPasswordResetError
    #[tracing::instrument(
        name = "RequestPasswordResetUseCase::execute",
        skip_all,
        fields(username = %session.username())
    )]
    pub async fn execute(
        &self,
        session: &AuthenticatedSession,
        requested_username: &str,
    ) -> Result<(), RequestPasswordResetError> {
        // Checked before any directory access so the rejection cannot depend
        // on whether the requested account exists.
        if session.username().as_str() != requested_username {
            tracing::warn!("Password reset requested for another account");
            return Err(RequestPasswordResetError::IdentityMismatch);
        }

        let user = self
            .user_directory
            .find_by_username(session.username())
            .await?
            .ok_or(RequestPasswordResetError::InvalidUsername)?;

        if !user.role().is_customer() {
            tracing::info!(role = %user.role(), "Password reset refused for non-customer account");
            return Err(RequestPasswordResetError::RoleNotEligible);
        }

        self.dispatcher.generate_and_send(&user).await?;

        Ok(())
    }
}
