use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::post,
};
use pin_reset_adapters::config::AllowedOrigins;
use pin_reset_axum::{
    middleware::{require_session, strip_unlisted_headers},
    routes::reset_password,
};
use pin_reset_core::{SessionAuthenticator, UserDirectory, VerificationCodeDispatcher};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::telemetry::{
    MakeRequestUuidV4, REQUEST_ID_HEADER, make_span_with_request_id, on_request, on_response,
};

/// Password reset service exposing `POST /reset-password`
pub struct PinResetService {
    router: Router,
}

impl PinResetService {
    /// Create a new PinResetService
    ///
    /// # Arguments
    /// * `user_directory` - Directory the caller's account is looked up in
    /// * `dispatcher` - Generates, stores and delivers the PIN code
    /// * `authenticator` - Resolves the caller's session from the request
    ///
    /// The session layer is a route layer, so unmatched paths still answer
    /// 404 instead of 401.
    pub fn new<D, V, A>(user_directory: D, dispatcher: V, authenticator: A) -> Self
    where
        D: UserDirectory + Clone + 'static,
        V: VerificationCodeDispatcher + Clone + 'static,
        A: SessionAuthenticator<RequestParts = request::Parts>,
    {
        let router = Router::new()
            .route("/reset-password", post(reset_password::<D, V>))
            .route_layer(middleware::from_fn_with_state(
                authenticator,
                require_session::<A>,
            ))
            .with_state((user_directory, dispatcher));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self
            .router
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            )
            .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
            .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuidV4));
        self
    }

    // Outermost layer, so it also sees headers added by CORS and tracing.
    fn with_header_allow_list(mut self) -> Self {
        self.router = self
            .router
            .layer(middleware::from_fn(strip_unlisted_headers));
        self
    }

    /// Convert the service into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().with_header_allow_list().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("PIN reset service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
