use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use axum_extra::extract::CookieJar;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use pin_reset_core::{AuthenticatedSession, SessionAuthenticator, Username, UsernameError};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use thiserror::Error;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_cookie_name: String,
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Resolves sessions from HS256 JWTs whose `sub` claim is the username.
///
/// The token is taken from an `Authorization: Bearer` header if present,
/// otherwise from the session cookie.
#[derive(Clone)]
pub struct JwtSessionAuthenticator {
    config: JwtAuthConfig,
}

impl JwtSessionAuthenticator {
    pub fn new(config: JwtAuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JwtAuthConfig {
        &self.config
    }
}

#[async_trait]
impl SessionAuthenticator for JwtSessionAuthenticator {
    type RequestParts = Parts;
    type Error = TokenAuthError;

    async fn resolve(&self, parts: &Self::RequestParts) -> Result<AuthenticatedSession, Self::Error> {
        let token = extract_token(&parts.headers, &self.config.jwt_cookie_name)?;
        let claims = validate_session_token(&token, &self.config)?;
        let username = Username::parse(claims.sub.expose_secret().clone())?;

        Ok(AuthenticatedSession::new(username))
    }
}

#[derive(Debug, Error)]
pub enum TokenAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Token error: {0}")]
    TokenError(jsonwebtoken::errors::Error),
    #[error("Invalid token subject: {0}")]
    InvalidSubject(#[from] UsernameError),
    #[error("Unexpected error")]
    UnexpectedError(String),
}

pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, TokenAuthError> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Ok(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .ok_or(TokenAuthError::MissingToken)
}

// Create a session token for `username`, valid for `token_ttl_seconds`
pub fn generate_session_token(
    username: &Username,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenAuthError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenAuthError::UnexpectedError("Failed to create session token duration".to_string()),
    )?;

    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenAuthError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    // Cast exp to a usize, which is what Claims expects
    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenAuthError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: Secret::from(username.as_str().to_string()),
        exp,
    };

    encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(TokenAuthError::TokenError)
}

// Check the signature and expiry of a session token
pub fn validate_session_token(
    token: &str,
    config: &JwtAuthConfig,
) -> Result<Claims, TokenAuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenAuthError::TokenError)
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: Secret<String>,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 2)?;
        state.serialize_field("sub", &self.sub.expose_secret())?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
