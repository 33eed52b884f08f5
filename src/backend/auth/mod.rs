//! Authentication Module
//!
//! Stateless bearer-token authentication.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── tokens.rs       - Token service (issue / validate / extract subject)
//! ├── passwords.rs    - bcrypt wrapper
//! ├── users.rs        - User model and credential store
//! ├── service.rs      - Login and registration flow
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, username and password → user created → token returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Any other request**: the request authenticator in `middleware`
//!    resolves the bearer token back to a user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Tokens expire after the configured lifetime (24 hours by default)
//! - Unknown email and wrong password return the same 401

/// User data model and database operations
pub mod users;

/// Token issuing and validation
pub mod tokens;

/// Password hashing
pub mod passwords;

/// Login and registration
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest};
pub use handlers::{login, register};
pub use tokens::{TokenError, TokenService};
pub use users::{User, UserView};
