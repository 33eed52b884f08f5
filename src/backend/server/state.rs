/**
 * Application State
 *
 * Shared, read-only handles every handler may need: the connection pool,
 * the token service holding the signing key, and the password hasher. No
 * mutable state lives here; each request is handled on its own.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::tokens::TokenService;
use crate::shared::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,

    pub tokens: Arc<TokenService>,

    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenService, hasher: PasswordHasher) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(tokens),
            hasher,
        }
    }

    /// Build the state from configuration and an already opened pool
    pub fn from_config(config: &AppConfig, db_pool: SqlitePool) -> Self {
        Self::new(
            db_pool,
            TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
