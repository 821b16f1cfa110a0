//! Axum framework adapter for the `ResponseBuilder` abstraction.
//!
//! The trait is defined in `pin_reset_core`; implementing it on a wrapper
//! around Axum's response builder keeps the framework-agnostic handlers
//! free of any Axum types.

use axum::body::Body;
use axum::http::{Response, StatusCode};
use pin_reset_core::ResponseBuilder;

/// Wrapper around Axum's response builder.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    /// Create a new Axum response builder
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
