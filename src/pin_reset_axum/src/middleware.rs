//! Request/response middleware for the PIN reset routes.

use axum::{
    extract::{Request, State},
    http::{HeaderName, request::Parts},
    middleware::Next,
    response::Response,
};
use pin_reset_adapters::handlers::reset_password::NOT_AUTHENTICATED;
use pin_reset_core::{ResponseHelpers, SessionAuthenticator, is_allowed_response_header};

use crate::adapters::response_builder;

/// Resolve the caller's session and make it available to routes as
/// `Extension<AuthenticatedSession>`.
///
/// Requests without valid credentials are answered with 401 before the
/// route runs.
pub async fn require_session<A>(
    State(authenticator): State<A>,
    request: Request,
    next: Next,
) -> Response
where
    A: SessionAuthenticator<RequestParts = Parts>,
{
    let (parts, body) = request.into_parts();

    match authenticator.resolve(&parts).await {
        Ok(session) => {
            let mut request = Request::from_parts(parts, body);
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        Err(error) => {
            tracing::info!(error = %error, "Rejected unauthenticated request");
            response_builder().unauthorized(NOT_AUTHENTICATED)
        }
    }
}

/// Remove every response header that is not on the allow-list.
pub async fn strip_unlisted_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    let blocked: Vec<HeaderName> = headers
        .keys()
        .filter(|name| !is_allowed_response_header(name.as_str()))
        .cloned()
        .collect();

    for name in blocked {
        tracing::warn!(header = %name, "Stripped response header not on the allow-list");
        headers.remove(&name);
    }

    response
}
