//! Password hashing
//!
//! Thin wrapper over bcrypt so the work factor comes from configuration
//! instead of being hard-coded at every call site.

use bcrypt::{hash, verify, BcryptError};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// One-way, salted hash of `password`
    pub fn hash(&self, password: &str) -> Result<String, BcryptError> {
        hash(password, self.cost)
    }

    /// Compare `password` against a stored hash.
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, BcryptError> {
        verify(password, password_hash)
    }
}
