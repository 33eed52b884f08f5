/**
 * Authentication Request/Response Types
 *
 * - `RegisterRequest` - body of `POST /auth/register`
 * - `LoginRequest` - body of `POST /auth/login`
 * - `AuthResponse` - token plus public user view, returned by both
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::UserView;
use crate::shared::error::{require_email, require_non_blank, SharedError};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_email("email", &self.email)?;
        require_non_blank("username", &self.username, "Username is required")?;
        require_non_blank("password", &self.password, "Password is required")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}
