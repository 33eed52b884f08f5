//! Authentication HTTP handlers
//!
//! - **`types`** - Request/response types
//! - **`register`** - `POST /auth/register`
//! - **`login`** - `POST /auth/login`

pub mod types;

pub mod register;

pub mod login;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, RegisterRequest};

// Re-export handlers
pub use register::register;
pub use login::login;
