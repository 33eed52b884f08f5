//! Route Configuration Module
//!
//! All HTTP routes live in `router`; the handlers themselves sit next to
//! their services (`auth::handlers`, `topics::handlers`,
//! `articles::handlers`, `profile::handlers`).
//!
//! # Routes
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/auth/register` | none |
//! | POST | `/auth/login` | none |
//! | GET, PUT | `/users/me` | required |
//! | GET, POST | `/topics` | required |
//! | GET | `/subscriptions/me` | required |
//! | POST, DELETE | `/subscriptions/{topic_id}` | required |
//! | GET, POST | `/articles` | required |
//! | GET | `/articles/{id}` | required |
//! | GET, POST | `/articles/{id}/comments` | required |

/// Main router creation
pub mod router;

pub use router::create_router;
