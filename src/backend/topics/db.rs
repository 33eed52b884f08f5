//! Database operations for topics and subscriptions

use sqlx::SqlitePool;

use crate::shared::content::TopicView;

/// Create a new topic
pub async fn create_topic(
    pool: &SqlitePool,
    name: &str,
    description: &str,
) -> Result<TopicView, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO topics (name, description)
        VALUES (?, ?)
        "#,
    )
    .bind(name)
    .bind(description)
    .execute(pool)
    .await?;

    Ok(TopicView {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        description: description.to_string(),
    })
}

pub async fn get_topic_by_id(pool: &SqlitePool, id: i64) -> Result<Option<TopicView>, sqlx::Error> {
    sqlx::query_as::<_, TopicView>(
        r#"
        SELECT id, name, description
        FROM topics
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn topic_name_exists(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS (SELECT 1 FROM topics WHERE name = ?)")
        .bind(name)
        .fetch_one(pool)
        .await?;

    Ok(found != 0)
}

/// Full topic catalog, in creation order
pub async fn list_topics(pool: &SqlitePool) -> Result<Vec<TopicView>, sqlx::Error> {
    sqlx::query_as::<_, TopicView>(
        r#"
        SELECT id, name, description
        FROM topics
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn subscription_exists(
    pool: &SqlitePool,
    user_id: i64,
    topic_id: i64,
) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT EXISTS (SELECT 1 FROM subscriptions WHERE user_id = ? AND topic_id = ?)",
    )
    .bind(user_id)
    .bind(topic_id)
    .fetch_one(pool)
    .await?;

    Ok(found != 0)
}

/// Insert a subscription row
///
/// The `(user_id, topic_id)` pair is UNIQUE; a duplicate surfaces as a
/// unique violation.
pub async fn create_subscription(
    pool: &SqlitePool,
    user_id: i64,
    topic_id: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO subscriptions (user_id, topic_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(topic_id)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Delete the matching subscription, returning how many rows went away
pub async fn delete_subscription(
    pool: &SqlitePool,
    user_id: i64,
    topic_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM subscriptions WHERE user_id = ? AND topic_id = ?")
        .bind(user_id)
        .bind(topic_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Ids of every topic the user follows
pub async fn subscribed_topic_ids(pool: &SqlitePool, user_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT topic_id
        FROM subscriptions
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Topics the user follows, in subscription order
pub async fn subscribed_topics(pool: &SqlitePool, user_id: i64) -> Result<Vec<TopicView>, sqlx::Error> {
    sqlx::query_as::<_, TopicView>(
        r#"
        SELECT t.id, t.name, t.description
        FROM subscriptions s
        JOIN topics t ON t.id = s.topic_id
        WHERE s.user_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
