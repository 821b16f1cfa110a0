//! Framework-agnostic password reset request handler.
//!
//! Every response this handler produces comes from a fixed template below.
//! The error type carries no account data, so a rejection can never echo
//! anything about the requested user.

use pin_reset_application::{RequestPasswordResetError, RequestPasswordResetUseCase};
use pin_reset_core::{
    AuthenticatedSession, ResponseBuilder, ResponseHelpers, UserDirectory,
    VerificationCodeDispatcher,
};
use serde::Deserialize;

pub const PIN_CODE_SENT: &str = "PIN code sent to your phone number";
pub const USERNAME_MISMATCH: &str = "El username ingresado no coincide con la sesión actual";
pub const INVALID_USERNAME: &str = "Invalid username";
pub const CUSTOMERS_ONLY: &str = "Only customers can reset their password through this feature";
pub const INTERNAL_ERROR: &str = "Internal Server Error";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Request body for `POST /reset-password`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResetPasswordRequest {
    pub username: String,
}

/// Framework-agnostic password reset request handler.
///
/// # Type Parameters
/// * `D` - User directory used to look up the account
/// * `V` - Dispatcher that generates and delivers the PIN code
/// * `B` - Response builder for the framework being used
///
/// # Arguments
/// * `user_directory` - The directory holding user records
/// * `dispatcher` - The PIN code dispatcher
/// * `session` - Caller identity, already resolved by the session middleware
/// * `request` - Deserialized request body
/// * `builder` - HTTP response builder
pub async fn handle_reset_password<D, V, B>(
    user_directory: D,
    dispatcher: V,
    session: &AuthenticatedSession,
    request: ResetPasswordRequest,
    builder: B,
) -> B::Response
where
    D: UserDirectory,
    V: VerificationCodeDispatcher,
    B: ResponseBuilder,
{
    let use_case = RequestPasswordResetUseCase::new(user_directory, dispatcher);

    match use_case.execute(session, &request.username).await {
        Ok(()) => builder.ok_detail(PIN_CODE_SENT),
        Err(error) => render_error(&error, builder),
    }
}

fn render_error<B: ResponseBuilder>(error: &RequestPasswordResetError, builder: B) -> B::Response {
    match error {
        RequestPasswordResetError::IdentityMismatch => builder.forbidden(USERNAME_MISMATCH),
        RequestPasswordResetError::InvalidUsername => builder.bad_request(INVALID_USERNAME),
        RequestPasswordResetError::RoleNotEligible => builder.bad_request(CUSTOMERS_ONLY),
        RequestPasswordResetError::UserDirectoryError(_)
        | RequestPasswordResetError::DispatchError(_) => {
            tracing::error!(error = %error, "Password reset request failed");
            builder.internal_error(INTERNAL_ERROR)
        }
    }
}
