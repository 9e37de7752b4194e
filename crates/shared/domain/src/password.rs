//! Credential hasher - Argon2 password hashing and verification.
//!
//! Hashes are salted per call with a random salt and use the library's
//! default cost parameters. Verification goes through the `password-hash`
//! verifier, which compares digests in constant time.

use argon2::{
    password_hash::{
        self, rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Hash a plaintext password.
pub fn hash(plain_text: &str) -> DomainResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2()
        .hash_password(plain_text.as_bytes(), &salt)
        .map_err(|e| DomainError::hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// # Errors
/// `InvalidCredentials` on mismatch, `Hashing` when `hashed` is not a
/// parseable hash string.
pub fn verify(hashed: &str, plain_text: &str) -> DomainResult<()> {
    let parsed = PasswordHash::new(hashed)
        .map_err(|e| DomainError::hashing(format!("Invalid hash format: {}", e)))?;

    match argon2().verify_password(plain_text.as_bytes(), &parsed) {
        Ok(()) => Ok(()),
        Err(password_hash::Error::Password) => Err(DomainError::InvalidCredentials),
        Err(e) => Err(DomainError::hashing(e.to_string())),
    }
}

#[inline]
fn argon2() -> Argon2<'static> {
    Argon2::default()
}

/// Password value object holding a hash, never the plaintext.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash the plaintext into a new value object.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        Ok(Self {
            hash: hash(plain_text)?,
        })
    }

    /// Wrap an existing hash (from the database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    pub fn verify(&self, plain_text: &str) -> DomainResult<()> {
        verify(&self.hash, plain_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash("secret123").unwrap();

        assert_ne!(hashed, "secret123");
        assert!(verify(&hashed, "secret123").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hashed = hash("secret123").unwrap();

        assert_eq!(
            verify(&hashed, "secret124"),
            Err(DomainError::InvalidCredentials)
        );
    }

    #[test]
    fn test_same_password_different_salts() {
        let first = hash("SamePassword123").unwrap();
        let second = hash("SamePassword123").unwrap();

        // Different salts produce different hashes
        assert_ne!(first, second);
        // But both verify correctly
        assert!(verify(&first, "SamePassword123").is_ok());
        assert!(verify(&second, "SamePassword123").is_ok());
    }

    #[test]
    fn test_verify_malformed_hash_is_hashing_error() {
        let result = verify("not-a-valid-hash", "anything");
        assert!(matches!(result, Err(DomainError::Hashing(_))));
    }

    #[test]
    fn test_password_value_object() {
        let password = Password::new("TestPassword123").unwrap();
        let restored = Password::from_hash(password.into_string());

        assert!(restored.verify("TestPassword123").is_ok());
        assert!(restored.verify("wrong").is_err());
        assert_eq!(format!("{:?}", restored), "Password { hash: \"[REDACTED]\" }");
    }
}
