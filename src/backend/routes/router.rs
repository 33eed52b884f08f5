/**
 * Router Configuration
 *
 * Assembles every HTTP route into one Axum router.
 *
 * # Route Groups
 *
 * 1. **Public**: `/auth/register` and `/auth/login`
 * 2. **Protected**: everything else, behind `require_principal`
 * 3. **Fallback**: JSON 404 for unknown paths
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request
 * 2. `CorsLayer` - answers preflight before authentication runs
 * 3. `authenticate` - resolves the bearer token to a `Principal`
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::articles::handlers as articles;
use crate::backend::auth::handlers::{login, register};
use crate::backend::middleware::{authenticate, require_principal};
use crate::backend::profile::handlers as profile;
use crate::backend::server::state::AppState;
use crate::backend::topics::handlers as topics;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared handles for the handlers
/// * `allowed_origins` - Origins the CORS layer lets through
pub fn create_router(app_state: AppState, allowed_origins: &[String]) -> Router<()> {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login));

    let protected = Router::new()
        .route("/users/me", get(profile::get_me).put(profile::update_me))
        .route("/topics", get(topics::list_topics).post(topics::create_topic))
        .route("/subscriptions/me", get(topics::my_subscriptions))
        .route(
            "/subscriptions/{topic_id}",
            post(topics::subscribe).delete(topics::unsubscribe),
        )
        .route("/articles", get(articles::get_feed).post(articles::create_article))
        .route("/articles/{id}", get(articles::get_article))
        .route(
            "/articles/{id}/comments",
            get(articles::list_comments).post(articles::create_comment),
        )
        .route_layer(from_fn(require_principal));

    public
        .merge(protected)
        .fallback(not_found)
        .layer(from_fn_with_state(app_state.clone(), authenticate))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Skipping invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
