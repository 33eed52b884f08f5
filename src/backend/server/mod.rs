//! Server Module
//!
//! - **`state`** - Application state shared by handlers
//! - **`config`** - Database loading and migrations
//! - **`init`** - Application assembly from configuration

pub mod state;

pub mod config;

pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
