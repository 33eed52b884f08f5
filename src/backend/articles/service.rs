/**
 * Article and Comment Services
 *
 * Writes are stamped with the server clock; clients never supply
 * `created_at`. References are checked before the insert so an unknown
 * author, topic or article is reported as the matching not-found error
 * instead of a foreign key failure.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::articles::db;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::topics::db::get_topic_by_id;
use crate::shared::content::{
    ArticleDetail, ArticleView, CommentView, CreateArticleRequest, CreateCommentRequest,
};

pub async fn create_article(
    pool: &SqlitePool,
    user_id: i64,
    request: &CreateArticleRequest,
) -> Result<ArticleView, BackendError> {
    request.validate()?;

    get_user_by_id(pool, user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;
    get_topic_by_id(pool, request.topic_id)
        .await?
        .ok_or(BackendError::TopicNotFound)?;

    let id = db::create_article(
        pool,
        user_id,
        request.topic_id,
        &request.title,
        &request.content,
        Utc::now(),
    )
    .await?;

    tracing::info!("Article {} created by user {} in topic {}", id, user_id, request.topic_id);

    db::get_article_view(pool, id)
        .await?
        .ok_or(BackendError::ArticleNotFound)
}

/// One article with its comments, newest comment first
pub async fn get_article(pool: &SqlitePool, id: i64) -> Result<ArticleDetail, BackendError> {
    let article = db::get_article_view(pool, id)
        .await?
        .ok_or(BackendError::ArticleNotFound)?;
    let comments = db::list_comments(pool, id).await?;

    Ok(ArticleDetail { article, comments })
}

pub async fn create_comment(
    pool: &SqlitePool,
    article_id: i64,
    user_id: i64,
    request: &CreateCommentRequest,
) -> Result<CommentView, BackendError> {
    request.validate()?;

    let author = get_user_by_id(pool, user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;
    if !db::article_exists(pool, article_id).await? {
        return Err(BackendError::ArticleNotFound);
    }

    let created_at = Utc::now();
    let id = db::create_comment(pool, article_id, user_id, &request.content, created_at).await?;

    tracing::debug!("Comment {} added to article {}", id, article_id);

    Ok(CommentView {
        id,
        content: request.content.clone(),
        author_name: author.username,
        created_at,
    })
}

pub async fn list_comments(pool: &SqlitePool, article_id: i64) -> Result<Vec<CommentView>, BackendError> {
    if !db::article_exists(pool, article_id).await? {
        return Err(BackendError::ArticleNotFound);
    }
    Ok(db::list_comments(pool, article_id).await?)
}
