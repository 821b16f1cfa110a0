use async_trait::async_trait;

use crate::domain::session::AuthenticatedSession;

/// Resolves the caller's identity from request credentials.
///
/// Authenticators extract a token or session id from the request,
/// verify it, and produce the `AuthenticatedSession` that protected
/// routes receive.
///
/// Different credential carriers are possible:
/// - JWT: cookie or `Authorization: Bearer` header, signature checked locally
/// - Opaque session id: cookie, looked up in a session store
///
/// # Implementation Note
///
/// The authenticator receives `RequestParts` (headers, method, URI, extensions)
/// rather than the full request so that non-`Sync` request bodies never need to
/// be shared across the await point.
#[async_trait]
pub trait SessionAuthenticator: Clone + Send + Sync + 'static {
    /// The request parts type this authenticator operates on.
    ///
    /// Typically `http::request::Parts`.
    type RequestParts: Send + Sync;

    /// Errors that can occur while resolving the session.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve the session from the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credentials are present
    /// - The credentials are invalid or expired
    /// - The identity they carry is not a valid username
    async fn resolve(
        &self,
        parts: &Self::RequestParts,
    ) -> Result<AuthenticatedSession, Self::Error>;
}
