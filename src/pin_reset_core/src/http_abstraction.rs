//! Framework-agnostic HTTP response abstraction.
//!
//! Handlers in `pin_reset_adapters` render their results through
//! [`ResponseBuilder`], which web frameworks implement on their own builder
//! types (via newtype wrappers), so the response policy lives in one place
//! regardless of the framework serving it.
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
//! │  pin_reset_axum: AxumResponseBuilder     │
//! │  impl ResponseBuilder for ... { }        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Handlers build responses generically    │
//! └──────────────────────────────────────────┘
//! ```

/// Response headers that may leave the service.
///
/// Everything else is stripped by the response sanitizing layer, so a
/// handler can never leak record data through ad-hoc headers.
pub const ALLOWED_RESPONSE_HEADERS: &[&str] = &[
    "content-type",
    "content-length",
    "date",
    "vary",
    "x-request-id",
];

/// Header name prefixes that are allowed in addition to the exact names above.
pub const ALLOWED_RESPONSE_HEADER_PREFIXES: &[&str] = &["access-control-"];

/// Returns `true` if a response header with this name may be sent to clients.
///
/// Matching is case-insensitive.
pub fn is_allowed_response_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    ALLOWED_RESPONSE_HEADERS.contains(&name.as_str())
        || ALLOWED_RESPONSE_HEADER_PREFIXES
            .iter()
            .any(|prefix| name.starts_with(prefix))
}

/// Trait for building HTTP responses.
///
/// Follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .json_body(json!({"detail": "PIN code sent to your phone number"}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for the `{"detail": ...}` responses this service emits.
///
/// Automatically implemented for all types that implement `ResponseBuilder`.
pub trait ResponseHelpers: ResponseBuilder {
    /// Create a JSON response with a single `detail` field
    fn detail(self, status: u16, message: &str) -> Self::Response {
        self.status(status)
            .json_body(serde_json::json!({ "detail": message }))
            .build()
    }

    /// Create a 200 OK response
    fn ok_detail(self, message: &str) -> Self::Response {
        self.detail(200, message)
    }

    /// Create a 400 Bad Request response
    fn bad_request(self, message: &str) -> Self::Response {
        self.detail(400, message)
    }

    /// Create a 401 Unauthorized response
    fn unauthorized(self, message: &str) -> Self::Response {
        self.detail(401, message)
    }

    /// Create a 403 Forbidden response
    fn forbidden(self, message: &str) -> Self::Response {
        self.detail(403, message)
    }

    /// Create a 500 Internal Server Error response
    fn internal_error(self, message: &str) -> Self::Response {
        self.detail(500, message)
    }
}

// Blanket implementation for all ResponseBuilder types
impl<T: ResponseBuilder> ResponseHelpers for T {}
