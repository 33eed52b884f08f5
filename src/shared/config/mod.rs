//! Server configuration
//!
//! Everything the server needs is read once at startup and passed down
//! explicitly: the database URL, the token signing secret and lifetime, the
//! listening port, CORS origins and the password hashing cost.
//!
//! # Environment
//!
//! | Variable | Default |
//! |---|---|
//! | `DATABASE_URL` | `sqlite://mdd.db` |
//! | `JWT_SECRET` | required, at least 32 bytes |
//! | `TOKEN_TTL_HOURS` | `24`, at most one year |
//! | `SERVER_PORT` | `3000` |
//! | `CORS_ALLOWED_ORIGINS` | `http://localhost:4200` |
//! | `BCRYPT_COST` | `12` |
//!
//! # Usage
//!
//! ```
//! use mdd::shared::config::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .database_url("sqlite::memory:")
//!     .jwt_secret("0123456789abcdef0123456789abcdef")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.port, 3000);
//! ```

use chrono::Duration;
use thiserror::Error;

/// Minimum HS256 key length in bytes
pub const MIN_SECRET_LEN: usize = 32;

const DEFAULT_DATABASE_URL: &str = "sqlite://mdd.db";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 366;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Process-wide configuration, immutable once built
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection URL for the SQLite store
    pub database_url: String,
    /// HMAC key used to sign bearer tokens
    pub jwt_secret: String,
    /// Lifetime of an issued token
    pub token_ttl: Duration,
    /// Port the HTTP server binds to on all interfaces
    pub port: u16,
    /// Origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Build the configuration from the process environment.
    ///
    /// Callers are expected to have run `dotenv` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(hours) = lookup("TOKEN_TTL_HOURS") {
            let parsed = hours
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidNumber("TOKEN_TTL_HOURS", hours.clone()))?;
            let ttl = Duration::try_hours(parsed).ok_or_else(|| {
                ConfigError::InvalidValue("TOKEN_TTL_HOURS", format!("{} hours is out of range", parsed))
            })?;
            builder = builder.token_ttl(ttl);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber("SERVER_PORT", port.clone()))?;
            builder = builder.port(port);
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            let origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
            builder = builder.allowed_origins(origins);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            let cost = cost
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber("BCRYPT_COST", cost.clone()))?;
            builder = builder.bcrypt_cost(cost);
        }

        builder.build()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret(MIN_SECRET_LEN));
        }
        if self.token_ttl <= Duration::zero() || self.token_ttl > Duration::hours(MAX_TOKEN_TTL_HOURS) {
            return Err(ConfigError::InvalidValue(
                "TOKEN_TTL_HOURS",
                format!("token lifetime must be between 1 and {} hours", MAX_TOKEN_TTL_HOURS),
            ));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(
                "BCRYPT_COST",
                format!(
                    "cost must be between {} and {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST
                ),
            ));
        }
        for origin in &self.allowed_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(origin.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct AppConfigBuilder {
    database_url: String,
    jwt_secret: Option<String>,
    token_ttl: Duration,
    port: u16,
    allowed_origins: Vec<String>,
    bcrypt_cost: u32,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: None,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            port: DEFAULT_PORT,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            token_ttl: self.token_ttl,
            port: self.port,
            allowed_origins: self.allowed_origins,
            bcrypt_cost: self.bcrypt_cost,
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("{0} is not a valid number: {1}")]
    InvalidNumber(&'static str, String),
    #[error("invalid {0}: {1}")]
    InvalidValue(&'static str, String),
    #[error("JWT_SECRET must be at least {0} bytes long")]
    WeakSecret(usize),
}
