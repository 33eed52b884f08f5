//! Article, feed and comment HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::articles::{feed, service};
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::content::{
    ArticleDetail, ArticleView, CommentView, CreateArticleRequest, CreateCommentRequest,
};

/// `GET /articles`
pub async fn get_feed(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
) -> Result<Json<Vec<ArticleView>>, BackendError> {
    let articles = feed::build_feed(&pool, principal.user_id).await?;
    Ok(Json(articles))
}

/// `POST /articles`
pub async fn create_article(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Json<ArticleView>, BackendError> {
    let article = service::create_article(&pool, principal.user_id, &request).await?;
    Ok(Json(article))
}

/// `GET /articles/{id}`
pub async fn get_article(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<ArticleDetail>, BackendError> {
    Ok(Json(service::get_article(&pool, id).await?))
}

/// `GET /articles/{id}/comments`
pub async fn list_comments(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CommentView>>, BackendError> {
    Ok(Json(service::list_comments(&pool, id).await?))
}

/// `POST /articles/{id}/comments`
pub async fn create_comment(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<CommentView>, BackendError> {
    let comment = service::create_comment(&pool, id, principal.user_id, &request).await?;
    Ok(Json(comment))
}
