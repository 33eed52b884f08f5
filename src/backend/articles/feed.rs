//! Personalized feed
//!
//! The feed is every article in a topic the user follows, newest first.
//! A user with no subscriptions gets an empty feed.

use sqlx::SqlitePool;

use crate::backend::articles::db;
use crate::backend::error::BackendError;
use crate::backend::topics::db::subscribed_topic_ids;
use crate::shared::content::ArticleView;

pub async fn build_feed(pool: &SqlitePool, user_id: i64) -> Result<Vec<ArticleView>, BackendError> {
    let topic_ids = subscribed_topic_ids(pool, user_id).await?;
    if topic_ids.is_empty() {
        return Ok(Vec::new());
    }

    let articles = db::list_articles_in_topics(pool, &topic_ids).await?;
    tracing::debug!(
        "Feed for user {}: {} articles from {} topics",
        user_id,
        articles.len(),
        topic_ids.len()
    );
    Ok(articles)
}
