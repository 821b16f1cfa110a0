use pin_reset_adapters::handlers::reset_password::{
    CUSTOMERS_ONLY, INVALID_USERNAME, NOT_AUTHENTICATED, PIN_CODE_SENT, USERNAME_MISMATCH,
};
use pin_reset_core::{PinCodeStore, UserId, UserRole, is_allowed_response_header};
use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn assert_only_allowed_headers(response: &reqwest::Response) {
    for name in response.headers().keys() {
        assert!(
            is_allowed_response_header(name.as_str()),
            "unexpected response header {name}"
        );
        assert!(!name.as_str().starts_with("x-user-"));
    }
}

#[tokio::test]
async fn should_return_403_without_user_data_on_username_mismatch() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;
    app.add_user(2, "bob", "+56922222222", UserRole::Customer)
        .await;

    let token = app.token_for("alice");
    let response = app
        .post_reset_password(Some(&token), &json!({ "username": "bob" }))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_only_allowed_headers(&response);

    let raw = response.text().await.unwrap();
    let body: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(body, json!({ "detail": USERNAME_MISMATCH }));
    for leaked in ["+56922222222", "+56911111111", "customer", "Test", "User\""] {
        assert!(!raw.contains(leaked), "response leaked {leaked}");
    }

    assert!(app.sms_client.sent_messages().await.is_empty());
    assert!(app.pin_code_store.get_code(UserId::new(2)).await.is_err());
}

#[tokio::test]
async fn should_return_403_on_mismatch_even_when_requested_user_does_not_exist() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;

    let token = app.token_for("alice");
    let response = app
        .post_reset_password(Some(&token), &json!({ "username": "nobody" }))
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": USERNAME_MISMATCH }));
}

#[tokio::test]
async fn should_return_400_when_session_user_is_missing() {
    let app = TestApp::new().await;

    let token = app.token_for("ghost");
    let response = app
        .post_reset_password(Some(&token), &json!({ "username": "ghost" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": INVALID_USERNAME }));
    assert!(app.sms_client.sent_messages().await.is_empty());
}

#[tokio::test]
async fn should_return_400_for_staff_user() {
    let app = TestApp::new().await;
    app.add_user(3, "carol", "+56933333333", UserRole::Staff)
        .await;

    let token = app.token_for("carol");
    let response = app
        .post_reset_password(Some(&token), &json!({ "username": "carol" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": CUSTOMERS_ONLY }));
    assert!(app.sms_client.sent_messages().await.is_empty());
}

#[tokio::test]
async fn should_send_single_sms_with_stored_code_for_customer() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;

    let token = app.token_for("alice");
    let response = app
        .post_reset_password(Some(&token), &json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_only_allowed_headers(&response);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": PIN_CODE_SENT }));

    let sent = app.sms_client.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "+56911111111");

    let stored = app.pin_code_store.get_code(UserId::new(1)).await.unwrap();
    assert!(sent[0].content.contains(stored.as_str()));
}

#[tokio::test]
async fn should_accept_token_from_cookie() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;

    let token = app.token_for("alice");
    let response = app
        .http_client
        .post(format!("{}/reset-password", &app.address))
        .header(
            "cookie",
            format!("{}={}", app.jwt_config.jwt_cookie_name, token),
        )
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_return_401_without_token() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;

    let response = app
        .post_reset_password(None, &json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": NOT_AUTHENTICATED }));
    assert!(app.sms_client.sent_messages().await.is_empty());
}

#[tokio::test]
async fn should_return_401_for_token_signed_with_other_secret() {
    let app = TestApp::new().await;

    let forged = pin_reset_adapters::auth_validation::generate_session_token(
        &pin_reset_core::Username::parse("alice").unwrap(),
        600,
        b"some-other-secret",
    )
    .unwrap();

    let response = app
        .post_reset_password(Some(&forged), &json!({ "username": "alice" }))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_bodies() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;
    let token = app.token_for("alice");

    let test_cases = [
        json!({}),
        json!({ "username": 42 }),
        json!({ "username": "alice", "role": "admin" }),
    ];

    for body in test_cases {
        let response = app.post_reset_password(Some(&token), &body).await;
        assert!(
            response.status().is_client_error(),
            "expected 4xx for {body}"
        );
        assert_ne!(response.status(), StatusCode::FORBIDDEN);
    }

    assert!(app.sms_client.sent_messages().await.is_empty());
}

#[tokio::test]
async fn should_return_404_for_unknown_path() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/does-not-exist", &app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_generated_request_id() {
    let app = TestApp::new().await;

    let response = app
        .post_reset_password(None, &json!({ "username": "alice" }))
        .await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id");
    assert_eq!(request_id.len(), 36);
    assert_eq!(request_id.matches('-').count(), 4);
}

#[tokio::test]
async fn should_echo_client_request_id() {
    let app = TestApp::new().await;
    app.add_user(1, "alice", "+56911111111", UserRole::Customer)
        .await;

    let response = app
        .http_client
        .post(format!("{}/reset-password", &app.address))
        .bearer_auth(app.token_for("alice"))
        .header("x-request-id", "client-supplied-id")
        .json(&json!({ "username": "alice" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("client-supplied-id")
    );
}
