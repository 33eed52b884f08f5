//! Profile payloads
//!
//! The password hash never leaves the server; `ProfileView` is all a client
//! ever sees of its own account.

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_email, SharedError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub email: String,
}

/// Body of `PUT /users/me`
///
/// Every field is optional. A field that is absent or blank keeps the
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Returns the value only when it is present and not blank.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl UpdateProfileRequest {
    pub fn username(&self) -> Option<&str> {
        provided(&self.username)
    }

    pub fn email(&self) -> Option<&str> {
        provided(&self.email)
    }

    pub fn password(&self) -> Option<&str> {
        provided(&self.password)
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(email) = self.email() {
            require_email("email", email)?;
        }
        Ok(())
    }
}
