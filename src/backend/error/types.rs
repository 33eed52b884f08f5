/**
 * Backend Error Types
 *
 * Every operation of the backend returns `Result<_, BackendError>`. Lookups
 * never fail by unwinding: a missing row comes back as `None` from the store
 * and is turned into the matching `*NotFound` variant by the caller.
 *
 * # Error Categories
 *
 * ## Declined operations
 *
 * The caller asked for something the data does not allow: bad credentials,
 * a duplicate email, topic or subscription, or a reference to a user, topic
 * or article that does not exist. These are detected before any write.
 *
 * ## Unauthorized
 *
 * A protected route was reached without a resolved principal.
 *
 * ## Infrastructure errors
 *
 * Database, migration, password hashing and token signing failures. Their
 * details are logged and never sent to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::auth::tokens::TokenError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Unknown email or wrong password; the two are not distinguished
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Topic not found")]
    TopicNotFound,

    #[error("Article not found")]
    ArticleNotFound,

    #[error("Already subscribed")]
    AlreadySubscribed,

    #[error("Topic already exists")]
    TopicAlreadyExists,

    /// Missing, invalid or expired token on a protected route
    #[error("Unauthorized")]
    Unauthorized,

    /// Payload rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] SharedError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - `EmailAlreadyExists`, `TopicAlreadyExists`, `AlreadySubscribed` - 409 Conflict
    /// - `UserNotFound`, `TopicNotFound`, `ArticleNotFound` - 404 Not Found
    /// - `Validation` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::EmailAlreadyExists | Self::TopicAlreadyExists | Self::AlreadySubscribed => {
                StatusCode::CONFLICT
            }
            Self::UserNotFound | Self::TopicNotFound | Self::ArticleNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Migration(_) | Self::Password(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to a client
    pub fn message(&self) -> String {
        if self.is_internal() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }

    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// True when the database refused a write because of a UNIQUE constraint.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
