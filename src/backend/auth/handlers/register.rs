/**
 * Registration Handler
 *
 * `POST /auth/register` - creates an account and returns a bearer token for
 * it, exactly like a login would.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::service;
use crate::backend::auth::tokens::TokenService;
use crate::backend::error::BackendError;

pub async fn register(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    State(hasher): State<PasswordHasher>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Register request for username: {}, email: {}", request.username, request.email);

    let response = service::register(&pool, &tokens, &hasher, &request).await?;
    Ok(Json(response))
}
