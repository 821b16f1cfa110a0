pub mod jwt_session_authenticator;

pub use jwt_session_authenticator::{
    Claims, JwtAuthConfig, JwtSessionAuthenticator, TokenAuthError, extract_token,
    generate_session_token, validate_session_token,
};
