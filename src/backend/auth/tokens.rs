/**
 * Bearer Tokens
 *
 * Issues and checks the HS256-signed JWTs that identify a user. A token
 * carries the user id as its subject plus issued-at and expiry timestamps.
 * Nothing is stored server-side: a token stays valid for its whole lifetime
 * and logging out is a client-side discard.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID, as a decimal string
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Bad signature, expired, or not a JWT at all
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id: {0}")]
    MalformedSubject(String),

    /// Issue time plus lifetime does not fit in a timestamp
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
}

/// Signs and verifies bearer tokens with a process-wide HMAC key
///
/// The key is handed in at construction, so tests can run with their own
/// secret and nothing reads it from a global.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token is dead the second its `exp` passes.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token for `user_id`, valid from now for the configured lifetime
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expiry = issued_at
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify signature, shape and expiry, returning the claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::Invalid)
    }

    /// True iff the token is well-formed, correctly signed and not expired.
    ///
    /// Never fails: every problem with the token reads as `false`.
    pub fn validate(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Rejected token: {}", e);
                false
            }
        }
    }

    /// Parse the subject of a token into a user id.
    ///
    /// The token is verified again here, so an unvalidated or expired token
    /// yields `TokenError::Invalid` rather than an identity.
    pub fn extract_subject(&self, token: &str) -> Result<i64, TokenError> {
        let claims = self.decode(token)?;
        claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::MalformedSubject(claims.sub))
    }
}
