//! Article and comment payloads and views
//!
//! Views are denormalized: they carry the author's username and the topic's
//! name so clients never need a second lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_max_chars, require_non_blank, SharedError};

/// Longest accepted article body, in characters
pub const MAX_ARTICLE_CONTENT_CHARS: usize = 5000;

/// An article as shown in the feed and on its own page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub topic_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

/// Response of `GET /articles/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleDetail {
    pub article: ArticleView,
    /// Newest first
    pub comments: Vec<CommentView>,
}

/// Body of `POST /articles`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub topic_id: i64,
    pub title: String,
    pub content: String,
}

impl CreateArticleRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("title", &self.title, "Title is required")?;
        require_non_blank("content", &self.content, "Content is required")?;
        require_max_chars("content", &self.content, MAX_ARTICLE_CONTENT_CHARS)
    }
}

/// Body of `POST /articles/{id}/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("content", &self.content, "Comment content is required")
    }
}
