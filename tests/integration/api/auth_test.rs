//! Authentication API integration tests
//!
//! Registration, login, and the route policy that guards everything
//! outside `/auth`.

use axum::http::StatusCode;

use crate::common::{register, test_server, TEST_SECRET};
use mdd::backend::auth::TokenService;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn tokens() -> TokenService {
    TokenService::new(TEST_SECRET.as_bytes(), chrono::Duration::hours(24))
}

#[tokio::test]
async fn test_register_success() {
    let server = test_server().await;

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "username": "alice",
            "password": "pw1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["username"], "alice");

    let token = body["token"].as_str().unwrap();
    let user_id = body["user"]["id"].as_i64().unwrap();
    assert!(tokens().validate(token));
    assert_eq!(tokens().extract_subject(token).unwrap(), user_id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = test_server().await;
    register(&server, "a@x.com", "alice", "pw1").await;

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "username": "other",
            "password": "pw2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email already exists");
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_register_invalid_payload() {
    let server = test_server().await;

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "username": "alice",
            "password": "pw1"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_success() {
    let server = test_server().await;
    register(&server, "a@x.com", "alice", "pw1").await;

    let response = server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();
    assert_eq!(
        tokens().extract_subject(token).unwrap(),
        body["user"]["id"].as_i64().unwrap()
    );
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let server = test_server().await;
    register(&server, "a@x.com", "alice", "pw1").await;

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "nope" }))
        .await;
    let unknown_email = server
        .post("/auth/login")
        .json(&json!({ "email": "b@x.com", "password": "pw1" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let server = test_server().await;

    let response = server.get("/users/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let server = test_server().await;

    let response = server
        .get("/topics")
        .authorization_bearer("invalid_token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let user_id = tokens().extract_subject(&token).unwrap();

    let expired = tokens()
        .issue_at(user_id, chrono::Utc::now() - chrono::Duration::hours(25))
        .unwrap();
    let response = server.get("/users/me").authorization_bearer(expired).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_another_secret() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let user_id = tokens().extract_subject(&token).unwrap();

    let foreign = TokenService::new(b"some-other-secret-that-is-32-bytes-long", chrono::Duration::hours(1))
        .issue(user_id)
        .unwrap();
    let response = server.get("/users/me").authorization_bearer(foreign).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = test_server().await;

    let response = server.get("/nowhere").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}
