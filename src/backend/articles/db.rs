//! Database operations for articles and comments
//!
//! Read queries join the author and topic so they return ready-to-send
//! views.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::shared::content::{ArticleView, CommentView};

const ARTICLE_VIEW_SELECT: &str = r#"
    SELECT a.id, a.title, a.content, u.username AS author_name, t.name AS topic_name, a.created_at
    FROM articles a
    JOIN users u ON u.id = a.author_id
    JOIN topics t ON t.id = a.topic_id
"#;

/// Insert an article and return its id
pub async fn create_article(
    pool: &SqlitePool,
    author_id: i64,
    topic_id: i64,
    title: &str,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO articles (title, content, created_at, author_id, topic_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(created_at)
    .bind(author_id)
    .bind(topic_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn get_article_view(pool: &SqlitePool, id: i64) -> Result<Option<ArticleView>, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new(ARTICLE_VIEW_SELECT);
    builder.push(" WHERE a.id = ").push_bind(id);

    builder
        .build_query_as::<ArticleView>()
        .fetch_optional(pool)
        .await
}

pub async fn article_exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS (SELECT 1 FROM articles WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(found != 0)
}

/// Articles in any of `topic_ids`, newest first
///
/// Equal timestamps fall back to id, later insertions first. An empty id
/// list returns no rows without touching the database.
pub async fn list_articles_in_topics(
    pool: &SqlitePool,
    topic_ids: &[i64],
) -> Result<Vec<ArticleView>, sqlx::Error> {
    if topic_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(ARTICLE_VIEW_SELECT);
    builder.push(" WHERE a.topic_id IN (");
    let mut separated = builder.separated(", ");
    for topic_id in topic_ids {
        separated.push_bind(*topic_id);
    }
    separated.push_unseparated(") ORDER BY a.created_at DESC, a.id DESC");

    builder.build_query_as::<ArticleView>().fetch_all(pool).await
}

/// Insert a comment and return its id
pub async fn create_comment(
    pool: &SqlitePool,
    article_id: i64,
    author_id: i64,
    content: &str,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO comments (content, created_at, author_id, article_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(content)
    .bind(created_at)
    .bind(author_id)
    .bind(article_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Comments on an article, newest first
pub async fn list_comments(pool: &SqlitePool, article_id: i64) -> Result<Vec<CommentView>, sqlx::Error> {
    sqlx::query_as::<_, CommentView>(
        r#"
        SELECT c.id, c.content, u.username AS author_name, c.created_at
        FROM comments c
        JOIN users u ON u.id = c.author_id
        WHERE c.article_id = ?
        ORDER BY c.created_at DESC, c.id DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await
}
