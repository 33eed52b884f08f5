/**
 * Topic and Subscription Services
 *
 * `subscribe` is strict: a second subscribe to the same topic is an error.
 * `unsubscribe` is idempotent: removing a subscription that does not exist
 * succeeds.
 *
 * The existence check in `subscribe` is not atomic with the insert. The
 * UNIQUE index on `(user_id, topic_id)` is what actually prevents double
 * subscriptions; a violation caught there is reported the same way.
 */

use std::collections::HashSet;

use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{is_unique_violation, BackendError};
use crate::backend::topics::db;
use crate::shared::content::{CreateTopicRequest, TopicView, TopicWithSubscription};

pub async fn create_topic(
    pool: &SqlitePool,
    request: &CreateTopicRequest,
) -> Result<TopicView, BackendError> {
    request.validate()?;

    if db::topic_name_exists(pool, &request.name).await? {
        tracing::warn!("Topic already exists: {}", request.name);
        return Err(BackendError::TopicAlreadyExists);
    }

    insert_topic(pool, request).await
}

/// Insert without the name pre-check; a duplicate still fails on the index.
async fn insert_topic(pool: &SqlitePool, request: &CreateTopicRequest) -> Result<TopicView, BackendError> {
    let topic = db::create_topic(pool, &request.name, &request.description)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::TopicAlreadyExists
            } else {
                BackendError::Database(e)
            }
        })?;

    tracing::info!("Topic created: {} ({})", topic.name, topic.id);
    Ok(topic)
}

/// Full catalog, each topic flagged with whether `user_id` follows it
///
/// One query for the user's subscriptions, one for the catalog, then a set
/// lookup per topic.
pub async fn list_topics_with_subscription(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<TopicWithSubscription>, BackendError> {
    let subscribed: HashSet<i64> = db::subscribed_topic_ids(pool, user_id)
        .await?
        .into_iter()
        .collect();

    let topics = db::list_topics(pool).await?;

    Ok(topics
        .into_iter()
        .map(|topic| {
            let is_subscribed = subscribed.contains(&topic.id);
            TopicWithSubscription::new(topic, is_subscribed)
        })
        .collect())
}

pub async fn subscribe(pool: &SqlitePool, user_id: i64, topic_id: i64) -> Result<(), BackendError> {
    if db::subscription_exists(pool, user_id, topic_id).await? {
        return Err(BackendError::AlreadySubscribed);
    }

    insert_subscription(pool, user_id, topic_id).await
}

/// Everything `subscribe` does after the duplicate pre-check
async fn insert_subscription(pool: &SqlitePool, user_id: i64, topic_id: i64) -> Result<(), BackendError> {
    get_user_by_id(pool, user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;
    db::get_topic_by_id(pool, topic_id)
        .await?
        .ok_or(BackendError::TopicNotFound)?;

    db::create_subscription(pool, user_id, topic_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::AlreadySubscribed
            } else {
                BackendError::Database(e)
            }
        })?;

    tracing::info!("User {} subscribed to topic {}", user_id, topic_id);
    Ok(())
}

pub async fn unsubscribe(pool: &SqlitePool, user_id: i64, topic_id: i64) -> Result<(), BackendError> {
    let removed = db::delete_subscription(pool, user_id, topic_id).await?;
    if removed > 0 {
        tracing::info!("User {} unsubscribed from topic {}", user_id, topic_id);
    }
    Ok(())
}

pub async fn list_subscriptions(pool: &SqlitePool, user_id: i64) -> Result<Vec<TopicView>, BackendError> {
    Ok(db::subscribed_topics(pool, user_id).await?)
}
