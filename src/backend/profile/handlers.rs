//! `GET /users/me` and `PUT /users/me`

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::service;
use crate::shared::content::{ProfileView, UpdateProfileRequest};

pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
) -> Result<Json<ProfileView>, BackendError> {
    Ok(Json(service::get_profile(&pool, principal.user_id).await?))
}

pub async fn update_me(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    AuthUser(principal): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileView>, BackendError> {
    let profile = service::update_profile(&pool, &hasher, principal.user_id, &request).await?;
    Ok(Json(profile))
}
