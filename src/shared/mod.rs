//! Shared Types
//!
//! Types that cross the HTTP boundary and carry no server machinery:
//!
//! - `content` - Request payloads and response views for topics, articles,
//!   comments and profiles
//! - `error` - Validation errors raised on incoming payloads
//! - `config` - Process-wide configuration loaded at startup

pub mod content;

pub mod error;

pub mod config;

pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
