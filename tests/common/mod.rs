//! Common test utilities and helpers
//!
//! Every test gets its own server over a fresh in-memory database, so
//! tests never see each other's rows and can run in parallel.

#![allow(dead_code)]

use axum_test::TestServer;
use mdd::backend::server::create_app;
use mdd::shared::AppConfig;
use serde_json::{json, Value};

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .database_url("sqlite::memory:")
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("valid test configuration")
}

pub async fn test_server() -> TestServer {
    let app = create_app(&test_config())
        .await
        .expect("failed to build app");
    TestServer::new(app).expect("failed to start test server")
}

/// Register through the API and return the issued token
pub async fn register(server: &TestServer, email: &str, username: &str, password: &str) -> String {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": email,
            "username": username,
            "password": password,
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("token in register response")
        .to_string()
}

/// Create a topic and return its id
pub async fn create_topic(server: &TestServer, token: &str, name: &str) -> i64 {
    let response = server
        .post("/topics")
        .authorization_bearer(token)
        .json(&json!({ "name": name, "description": format!("all about {}", name) }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["id"].as_i64().expect("topic id")
}

/// Publish an article and return its id
pub async fn create_article(server: &TestServer, token: &str, topic_id: i64, title: &str) -> i64 {
    let response = server
        .post("/articles")
        .authorization_bearer(token)
        .json(&json!({ "topicId": topic_id, "title": title, "content": "Lorem ipsum" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["id"].as_i64().expect("article id")
}
