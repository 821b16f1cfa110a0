//! Axum integration for the PIN reset service.
//!
//! This crate provides Axum adapters for the framework-agnostic handlers
//! defined in `pin_reset_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  pin_reset_core: ResponseBuilder trait   │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  pin_reset_axum: Axum implementations    │
//! │  - AxumResponseBuilder                   │
//! │  - session / header middleware           │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use pin_reset_axum::{middleware::{require_session, strip_unlisted_headers}, routes};
//!
//! let app = Router::new()
//!     .route("/reset-password", post(routes::reset_password::<D, V>))
//!     .with_state((user_directory, dispatcher))
//!     .layer(middleware::from_fn_with_state(authenticator, require_session::<A>))
//!     .layer(middleware::from_fn(strip_unlisted_headers));
//! ```

pub mod adapters;
pub mod middleware;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
