//! Axum-specific password reset request route.
//!
//! This route requires a session - `require_session` must run before it.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use pin_reset_adapters::handlers::{self, ResetPasswordRequest};
use pin_reset_core::{
    AuthenticatedSession, ResponseHelpers, UserDirectory, VerificationCodeDispatcher,
};

use crate::adapters::response_builder;

/// Axum password reset request route.
///
/// The actual request logic is in the framework-agnostic handler.
#[tracing::instrument(name = "Reset Password", skip_all)]
pub async fn reset_password<D, V>(
    State((user_directory, dispatcher)): State<(D, V)>,
    Extension(session): Extension<AuthenticatedSession>,
    request: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> Response
where
    D: UserDirectory + Clone + 'static,
    V: VerificationCodeDispatcher + Clone + 'static,
{
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            return response_builder().detail(rejection.status().as_u16(), &rejection.body_text());
        }
    };

    handlers::handle_reset_password(
        user_directory,
        dispatcher,
        &session,
        request,
        response_builder(),
    )
    .await
}
