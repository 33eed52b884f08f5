/**
 * Login Handler
 *
 * `POST /auth/login` - exchanges email and password for a bearer token.
 * Public route: no principal is required.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::service;
use crate::backend::auth::tokens::TokenService;
use crate::backend::error::BackendError;

pub async fn login(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenService>>,
    State(hasher): State<PasswordHasher>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {}", request.email);

    let response = service::login(&pool, &tokens, &hasher, &request).await?;
    Ok(Json(response))
}
