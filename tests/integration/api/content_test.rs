//! Content API integration tests
//!
//! Topics, subscriptions, the feed, articles with their comments, and the
//! profile endpoints, all driven through HTTP with a real token.

use axum::http::StatusCode;

use crate::common::{create_article, create_topic, register, test_server};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_register_profile_topics_and_subscription_flow() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;

    let me = server.get("/users/me").authorization_bearer(&token).await;
    assert_eq!(me.status_code(), StatusCode::OK);
    assert_eq!(me.json::<Value>(), json!({ "username": "alice", "email": "a@x.com" }));

    let created = server
        .post("/topics")
        .authorization_bearer(&token)
        .json(&json!({ "name": "tech", "description": "desc" }))
        .await;
    assert_eq!(created.status_code(), StatusCode::OK);
    let topic_id = created.json::<Value>()["id"].as_i64().unwrap();

    let topics = server.get("/topics").authorization_bearer(&token).await;
    assert_eq!(
        topics.json::<Value>(),
        json!([{ "id": topic_id, "name": "tech", "description": "desc", "subscribed": false }])
    );

    let subscribed = server
        .post(&format!("/subscriptions/{}", topic_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(subscribed.status_code(), StatusCode::OK);

    let topics = server.get("/topics").authorization_bearer(&token).await;
    assert_eq!(topics.json::<Value>()[0]["subscribed"], true);
}

#[tokio::test]
async fn test_duplicate_topic_name() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    create_topic(&server, &token, "tech").await;

    let response = server
        .post("/topics")
        .authorization_bearer(&token)
        .json(&json!({ "name": "tech", "description": "again" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_subscribe_twice_conflicts() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let topic_id = create_topic(&server, &token, "tech").await;
    let path = format!("/subscriptions/{}", topic_id);

    server.post(&path).authorization_bearer(&token).await.assert_status_ok();
    let second = server.post(&path).authorization_bearer(&token).await;

    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    assert_eq!(second.json::<Value>()["error"], "Already subscribed");
}

#[tokio::test]
async fn test_subscribe_unknown_topic() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;

    let response = server.post("/subscriptions/999").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsubscribe_is_idempotent() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let topic_id = create_topic(&server, &token, "tech").await;
    let path = format!("/subscriptions/{}", topic_id);

    server.post(&path).authorization_bearer(&token).await.assert_status_ok();

    let first = server.delete(&path).authorization_bearer(&token).await;
    let second = server.delete(&path).authorization_bearer(&token).await;
    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(second.status_code(), StatusCode::NO_CONTENT);

    let mine = server.get("/subscriptions/me").authorization_bearer(&token).await;
    assert_eq!(mine.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_my_subscriptions_lists_followed_topics() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let tech = create_topic(&server, &token, "tech").await;
    create_topic(&server, &token, "food").await;

    server
        .post(&format!("/subscriptions/{}", tech))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let mine = server.get("/subscriptions/me").authorization_bearer(&token).await;
    let body = mine.json::<Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "tech");
    assert!(body[0].get("subscribed").is_none());
}

#[tokio::test]
async fn test_empty_feed_without_subscriptions() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let topic_id = create_topic(&server, &token, "tech").await;
    create_article(&server, &token, topic_id, "unseen").await;

    let feed = server.get("/articles").authorization_bearer(&token).await;

    assert_eq!(feed.status_code(), StatusCode::OK);
    assert_eq!(feed.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_feed_follows_subscriptions_newest_first() {
    let server = test_server().await;
    let reader = register(&server, "r@x.com", "reader", "pw1").await;
    let writer = register(&server, "w@x.com", "writer", "pw2").await;
    let tech = create_topic(&server, &writer, "tech").await;
    let food = create_topic(&server, &writer, "food").await;

    server
        .post(&format!("/subscriptions/{}", tech))
        .authorization_bearer(&reader)
        .await
        .assert_status_ok();

    create_article(&server, &writer, tech, "first").await;
    create_article(&server, &writer, food, "elsewhere").await;
    create_article(&server, &writer, tech, "second").await;

    let feed = server.get("/articles").authorization_bearer(&reader).await;
    let body = feed.json::<Value>();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
    assert_eq!(body[0]["authorName"], "writer");
    assert_eq!(body[0]["topicName"], "tech");
}

#[tokio::test]
async fn test_create_article_validation_and_unknown_topic() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let topic_id = create_topic(&server, &token, "tech").await;

    let blank_title = server
        .post("/articles")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": topic_id, "title": " ", "content": "body" }))
        .await;
    assert_eq!(blank_title.status_code(), StatusCode::BAD_REQUEST);

    let unknown_topic = server
        .post("/articles")
        .authorization_bearer(&token)
        .json(&json!({ "topicId": 999, "title": "Hello", "content": "body" }))
        .await;
    assert_eq!(unknown_topic.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_article_detail_with_comments() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    let topic_id = create_topic(&server, &token, "tech").await;
    let article_id = create_article(&server, &token, topic_id, "Hello").await;
    let comments_path = format!("/articles/{}/comments", article_id);

    let comment = server
        .post(&comments_path)
        .authorization_bearer(&token)
        .json(&json!({ "content": "Nice post" }))
        .await;
    assert_eq!(comment.status_code(), StatusCode::OK);
    let comment = comment.json::<Value>();
    assert_eq!(comment["content"], "Nice post");
    assert_eq!(comment["authorName"], "alice");
    assert!(comment["createdAt"].is_string());

    let listed = server.get(&comments_path).authorization_bearer(&token).await;
    assert_eq!(listed.json::<Value>(), json!([comment.clone()]));

    let detail = server
        .get(&format!("/articles/{}", article_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(detail.status_code(), StatusCode::OK);
    let detail = detail.json::<Value>();
    assert_eq!(detail["article"]["title"], "Hello");
    assert_eq!(detail["comments"], json!([comment]));
}

#[tokio::test]
async fn test_missing_article() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;

    let detail = server.get("/articles/42").authorization_bearer(&token).await;
    assert_eq!(detail.status_code(), StatusCode::NOT_FOUND);

    let comments = server.get("/articles/42/comments").authorization_bearer(&token).await;
    assert_eq!(comments.status_code(), StatusCode::NOT_FOUND);

    let comment = server
        .post("/articles/42/comments")
        .authorization_bearer(&token)
        .json(&json!({ "content": "hello?" }))
        .await;
    assert_eq!(comment.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_profile_username_only() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;

    let updated = server
        .put("/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "username": "x" }))
        .await;
    assert_eq!(updated.status_code(), StatusCode::OK);
    assert_eq!(updated.json::<Value>(), json!({ "username": "x", "email": "a@x.com" }));

    // Password untouched: the old one still logs in.
    server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_update_profile_password() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;

    server
        .put("/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "password": "pw2" }))
        .await
        .assert_status_ok();

    let old = server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await;
    assert_eq!(old.status_code(), StatusCode::UNAUTHORIZED);

    server
        .post("/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "pw2" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_update_profile_email_taken() {
    let server = test_server().await;
    let token = register(&server, "a@x.com", "alice", "pw1").await;
    register(&server, "b@x.com", "bob", "pw2").await;

    let response = server
        .put("/users/me")
        .authorization_bearer(&token)
        .json(&json!({ "email": "b@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}
