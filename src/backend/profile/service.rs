/**
 * Profile Service
 *
 * Reads and partially updates the signed-in user's account. Fields left
 * out of an update (or sent blank) keep their stored value; a new password
 * is hashed before it is written.
 */

use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::users::{get_user_by_email, get_user_by_id, update_user, User};
use crate::backend::error::{is_unique_violation, BackendError};
use crate::shared::content::{ProfileView, UpdateProfileRequest};

fn profile_of(user: &User) -> ProfileView {
    ProfileView {
        username: user.username.clone(),
        email: user.email.clone(),
    }
}

pub async fn get_profile(pool: &SqlitePool, user_id: i64) -> Result<ProfileView, BackendError> {
    let user = get_user_by_id(pool, user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;
    Ok(profile_of(&user))
}

pub async fn update_profile(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    user_id: i64,
    request: &UpdateProfileRequest,
) -> Result<ProfileView, BackendError> {
    request.validate()?;

    let mut user = get_user_by_id(pool, user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;

    if let Some(username) = request.username() {
        user.username = username.to_string();
    }

    if let Some(email) = request.email() {
        if email != user.email {
            if let Some(owner) = get_user_by_email(pool, email).await? {
                if owner.id != user.id {
                    tracing::warn!("Profile update rejected, email taken: {}", email);
                    return Err(BackendError::EmailAlreadyExists);
                }
            }
        }
        user.email = email.to_string();
    }

    if let Some(password) = request.password() {
        user.password_hash = hasher.hash(password)?;
    }

    update_user(pool, &user).await.map_err(|e| {
        if is_unique_violation(&e) {
            BackendError::EmailAlreadyExists
        } else {
            BackendError::Database(e)
        }
    })?;

    tracing::info!("Profile updated for user {}", user.id);
    Ok(profile_of(&user))
}
