//! MDD - Content Sharing Backend
//!
//! Users register and log in, subscribe to topics, publish articles under a
//! topic and comment on them. Each user's feed is the articles of the topics
//! they follow, newest first.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration, validation errors, and the payloads and
//!   views exchanged over HTTP
//! - **`backend`** - Axum server, authentication, persistence and services
//!
//! # Usage
//!
//! ```rust,no_run
//! use mdd::backend::server::init::create_app;
//! use mdd::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod shared;
pub mod backend;
