/**
 * Server Initialization
 *
 * Turns an `AppConfig` into a ready-to-serve router:
 *
 * 1. Open the database and run migrations
 * 2. Build the token service and password hasher from configuration
 * 3. Assemble the router with middleware
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing MDD backend server");

    let db_pool = load_database(config).await?;
    let app_state = AppState::from_config(config, db_pool);

    let app = create_router(app_state, &config.allowed_origins);
    tracing::info!("Router configured");

    Ok(app)
}
