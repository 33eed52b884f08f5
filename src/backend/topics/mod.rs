//! Topics and subscriptions
//!
//! - `db` - Topic and subscription store
//! - `service` - Topic catalog and subscribe/unsubscribe rules
//! - `handlers` - HTTP handlers for `/topics` and `/subscriptions`

pub mod db;
pub mod service;
pub mod handlers;
