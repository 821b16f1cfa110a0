//! Framework-agnostic request handlers.
//!
//! These handlers contain the request logic without any framework dependencies.
//! Framework-specific routes (Axum, Actix, etc.) extract data from requests, call these handlers,
//! and hand back the response their `ResponseBuilder` produced.

pub mod reset_password;

pub use reset_password::{ResetPasswordRequest, handle_reset_password};
