//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite store, with
//! stateless bearer-token authentication.
//!
//! # Architecture
//!
//! - **`server`** - Database loading, application state, app assembly
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - Request authenticator and route policy
//! - **`auth`** - Credential store, password hashing, tokens, register/login
//! - **`topics`** - Topic catalog and subscriptions
//! - **`articles`** - Articles, comments and the subscription feed
//! - **`profile`** - The signed-in user's profile
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Authenticator
//! ├── auth/           - Authentication
//! ├── topics/         - Topics and subscriptions
//! ├── articles/       - Articles, comments, feed
//! ├── profile/        - User profile
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Every request passes through `middleware::authenticate`, which attaches
//! a `Principal` when the bearer token is valid and otherwise does nothing.
//! Routes outside `/auth` are wrapped in `require_principal`, and handlers
//! receive the principal through the `AuthUser` extractor. Handlers call
//! into a service module; services return `Result<_, BackendError>` and the
//! error is rendered as a JSON body with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Topic catalog and subscriptions
pub mod topics;

/// Articles, comments and feed
pub mod articles;

/// Profile read and update
pub mod profile;


/// Re-export commonly used types
pub use server::create_app;
pub use error::BackendError;
