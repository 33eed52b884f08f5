//! Middleware Module
//!
//! - **`auth`** - Request authenticator, route policy and the `AuthUser` extractor

pub mod auth;

pub use auth::{authenticate, require_principal, AuthUser, Principal};
