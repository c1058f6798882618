//! Salted SHA-256 hashing for passwords and verification codes.

use sha2::{Digest, Sha256};

use pl_core::services::verification::SecretHasherTrait;

/// Default salt used when `SECRET_SALT` is not set. Development only.
const DEFAULT_SALT: &str = "plantera-dev-salt";

/// SHA-256 based implementation of [`SecretHasherTrait`].
///
/// Passwords are hashed as `sha256("{salt}:{password}")`; verification
/// codes are short-lived and hashed unsalted. Both outputs are lowercase
/// hex.
pub struct Sha256SecretHasher {
    salt: String,
}

impl Sha256SecretHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Build from the `SECRET_SALT` environment variable.
    pub fn from_env() -> Self {
        let salt = std::env::var("SECRET_SALT").unwrap_or_else(|_| DEFAULT_SALT.to_string());
        Self::new(salt)
    }

    fn digest(input: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(input.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl SecretHasherTrait for Sha256SecretHasher {
    fn hash_password(&self, raw: &str) -> String {
        Self::digest(&format!("{}:{}", self.salt, raw))
    }

    fn hash_code(&self, code: &str) -> String {
        Self::digest(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_deterministic_hex() {
        let hasher = Sha256SecretHasher::new("salt");
        let a = hasher.hash_password("leafy-green-8");
        let b = hasher.hash_password("leafy-green-8");

        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!a.contains("leafy-green-8"));
    }

    #[test]
    fn test_salt_changes_password_hash() {
        let a = Sha256SecretHasher::new("salt-a").hash_password("leafy-green-8");
        let b = Sha256SecretHasher::new("salt-b").hash_password("leafy-green-8");
        assert_ne!(a, b);
    }

    #[test]
    fn test_code_hash_ignores_salt() {
        let a = Sha256SecretHasher::new("salt-a").hash_code("482913");
        let b = Sha256SecretHasher::new("salt-b").hash_code("482913");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }
}
