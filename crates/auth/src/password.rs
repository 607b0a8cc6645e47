//! Password hashing.
//!
//! Argon2id with the crate's default cost parameters and a random 16 byte
//! salt per hash. Hashes are stored as PHC strings, which carry the algorithm,
//! parameters and salt alongside the digest.
//!
//! Both operations are CPU and memory heavy on purpose; async callers should
//! run them on a blocking thread.

use argon2::password_hash::{self, SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing failed (e.g. the allocator refused the memory cost).
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// A stored hash could not be parsed as a PHC string.
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),

    /// Verification failed for a reason other than a wrong password.
    #[error("password verification failed: {0}")]
    Verify(String),
}

/// PHC-encoded one-way password hash.
///
/// `Debug` is redacted so a hash never ends up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a clear-text password with a fresh salt.
    pub fn generate(password: &str) -> Result<Self, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap a PHC string read back from storage.
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Run the full verification routine.
    ///
    /// `Ok(false)` means the password does not match; `Err` is reserved for
    /// malformed hashes and internal failures.
    pub fn verify(&self, password: &str) -> Result<bool, PasswordError> {
        let parsed = password_hash::PasswordHash::new(&self.0)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::Verify(e.to_string())),
        }
    }
}

impl core::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
