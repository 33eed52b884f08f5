//! Topic and subscription HTTP handlers
//!
//! All of these sit behind the principal requirement.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::topics::service;
use crate::shared::content::{CreateTopicRequest, TopicView, TopicWithSubscription};

/// `GET /topics`
pub async fn list_topics(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<TopicWithSubscription>>, BackendError> {
    let topics = service::list_topics_with_subscription(&pool, principal.user_id).await?;
    Ok(Json(topics))
}

/// `POST /topics`
pub async fn create_topic(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateTopicRequest>,
) -> Result<Json<TopicView>, BackendError> {
    let topic = service::create_topic(&pool, &request).await?;
    Ok(Json(topic))
}

/// `POST /subscriptions/{topic_id}`
pub async fn subscribe(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
    Path(topic_id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    service::subscribe(&pool, principal.user_id, topic_id).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /subscriptions/{topic_id}`
pub async fn unsubscribe(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
    Path(topic_id): Path<i64>,
) -> Result<StatusCode, BackendError> {
    service::unsubscribe(&pool, principal.user_id, topic_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /subscriptions/me`
pub async fn my_subscriptions(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<TopicView>>, BackendError> {
    let topics = service::list_subscriptions(&pool, principal.user_id).await?;
    Ok(Json(topics))
}
