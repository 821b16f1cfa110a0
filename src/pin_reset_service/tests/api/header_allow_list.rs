use axum::{
    Router,
    http::{HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
};
use pin_reset_adapters::config::test;
use pin_reset_axum::middleware::strip_unlisted_headers;

async fn leaky_handler() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert("x-user-id", "2".parse().unwrap());
    headers.insert("x-user-phone", "+56922222222".parse().unwrap());
    headers.insert("x-request-id", "abc".parse().unwrap());
    (StatusCode::OK, headers, "ok")
}

#[tokio::test]
async fn should_strip_headers_not_on_the_allow_list() {
    let router = Router::new()
        .route("/leaky", get(leaky_handler))
        .layer(middleware::from_fn(strip_unlisted_headers));

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .unwrap();
    let address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move { axum::serve(listener, router).await });

    let response = reqwest::get(format!("{address}/leaky")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-user-id").is_none());
    assert!(response.headers().get("x-user-phone").is_none());
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("abc")
    );
}
