/**
 * Auth Flow
 *
 * Login and registration on top of the credential store, the password
 * hasher and the token service. Both return the same shape: a fresh bearer
 * token and the public view of the user. Registration signs the new user in
 * straight away.
 *
 * Failures are detected before anything is written, so a failed call never
 * leaves a partial user behind.
 */

use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::tokens::TokenService;
use crate::backend::auth::users::{create_user, get_user_by_email, User, UserView};
use crate::backend::error::{is_unique_violation, BackendError};

/// Authenticate by email and password
///
/// Unknown email and wrong password both fail with `InvalidCredentials`.
pub async fn login(
    pool: &SqlitePool,
    tokens: &TokenService,
    hasher: &PasswordHasher,
    request: &LoginRequest,
) -> Result<AuthResponse, BackendError> {
    let user = get_user_by_email(pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            BackendError::InvalidCredentials
        })?;

    if !hasher.verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(AuthResponse {
        token,
        user: UserView::from(&user),
    })
}

/// Create an account and sign it in
pub async fn register(
    pool: &SqlitePool,
    tokens: &TokenService,
    hasher: &PasswordHasher,
    request: &RegisterRequest,
) -> Result<AuthResponse, BackendError> {
    request.validate()?;

    if get_user_by_email(pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::EmailAlreadyExists);
    }

    let password_hash = hasher.hash(&request.password)?;
    let user = insert_user(pool, request, &password_hash).await?;

    let token = tokens.issue(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(AuthResponse {
        token,
        user: UserView::from(&user),
    })
}

/// A concurrent registration can still win the race after the email
/// pre-check; the unique index on email catches it here.
async fn insert_user(
    pool: &SqlitePool,
    request: &RegisterRequest,
    password_hash: &str,
) -> Result<User, BackendError> {
    create_user(pool, &request.email, &request.username, password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                BackendError::EmailAlreadyExists
            } else {
                BackendError::Database(e)
            }
        })
}
