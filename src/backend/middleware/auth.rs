/**
 * Request Authenticator
 *
 * Runs once per request, before routing. It resolves an
 * `Authorization: Bearer <token>` header to the user it names and stores
 * that user in the request extensions as a `Principal`. It never rejects a
 * request: a missing header, a bad or expired token, or a token naming a
 * deleted user all just leave the request unauthenticated.
 *
 * Whether an unauthenticated request may proceed is decided per route:
 * `require_principal` guards the protected part of the router, and handlers
 * that act on behalf of a user take the principal explicitly through the
 * `AuthUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// The authenticated user attached to a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self { user_id: user.id }
    }
}

/// Pull the raw token out of the headers, if the scheme is `Bearer`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

/// Resolve the request headers to a principal, or `None`.
pub async fn resolve_principal(state: &AppState, headers: &HeaderMap) -> Option<Principal> {
    let token = bearer_token(headers)?;

    if !state.tokens.validate(token) {
        tracing::debug!("Ignoring invalid bearer token");
        return None;
    }

    let user_id = match state.tokens.extract_subject(token) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Invalid user ID in token: {}", e);
            return None;
        }
    };

    match get_user_by_id(&state.db_pool, user_id).await {
        Ok(Some(user)) => Some(Principal::from(user)),
        Ok(None) => {
            tracing::warn!("Token references unknown user: {}", user_id);
            None
        }
        Err(e) => {
            tracing::error!("Database error while resolving principal: {:?}", e);
            None
        }
    }
}

/// Middleware attaching a `Principal` to requests carrying a usable token
pub async fn authenticate(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(principal) = resolve_principal(&app_state, request.headers()).await {
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}

/// Route policy for everything outside `/auth`: a principal is required.
pub async fn require_principal(request: Request, next: Next) -> Result<Response, BackendError> {
    if request.extensions().get::<Principal>().is_none() {
        tracing::debug!("Unauthenticated request to {}", request.uri().path());
        return Err(BackendError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Extractor handing the resolved principal to a handler
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or(BackendError::Unauthorized)
    }
}
