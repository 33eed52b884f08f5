/**
 * User Model and Database Operations
 *
 * The credential store. Lookups return `Option<User>`; deciding whether a
 * missing user is an error is left to the caller.
 */

use serde::Serialize;
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub username: String,
}

/// Public view of a user; never carries the hash
#[derive(Debug, Clone, Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
        }
    }
}

/// Create a new user
///
/// # Returns
///
/// The stored user, or the database error (a duplicate email surfaces as a
/// unique violation)
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (email, username, password_hash)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(email)
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(User {
        id: result.last_insert_rowid(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        username: username.to_string(),
    })
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, username
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, username
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite the mutable fields of a user
pub async fn update_user(pool: &SqlitePool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET email = ?, username = ?, password_hash = ?
        WHERE id = ?
        "#,
    )
    .bind(&user.email)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(user.id)
    .execute(pool)
    .await?;

    Ok(())
}
