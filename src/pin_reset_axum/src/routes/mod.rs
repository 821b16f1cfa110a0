//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers, and return the responses they build.

pub mod reset_password;

pub use reset_password::reset_password;
