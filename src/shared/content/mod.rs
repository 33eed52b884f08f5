//! Content Module
//!
//! Payloads and views exchanged over the HTTP API for the content side of
//! the application:
//!
//! - `topic` - Topics and the per-user subscription flag
//! - `article` - Articles, comments and the article detail page
//! - `profile` - The signed-in user's profile
//!
//! Request types carry a `validate()` method that checks the same limits as
//! the database schema, so bad input is rejected before any write.

pub mod topic;
pub mod article;
pub mod profile;

// Re-export all types
pub use topic::{CreateTopicRequest, TopicView, TopicWithSubscription};
pub use article::{
    ArticleDetail, ArticleView, CommentView, CreateArticleRequest, CreateCommentRequest,
};
pub use profile::{ProfileView, UpdateProfileRequest};
