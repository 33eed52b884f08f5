//! Articles, comments and the subscription feed

pub mod db;
pub mod feed;
pub mod service;
pub mod handlers;
