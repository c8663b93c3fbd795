//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random salt per hash (PHC string output)
//! - Optional application-wide pepper appended before hashing
//! - Zeroization of clear text on drop
//!
//! ## Policy
//! A new password must be 8 to 128 characters (after NFKC normalization)
//! and contain at least one ASCII digit and one character outside
//! `[A-Za-z0-9]`. Verification of an existing password never applies the
//! policy, so accounts created under older rules can still sign in.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password is mandatory")]
    EmptyOrWhitespace,

    #[error("Password must be at least {min} characters long (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters long (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must contain at least one special character")]
    MissingSymbol,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, erased from memory when dropped.
///
/// Not `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize and check a password chosen by a user.
    pub fn new(raw: &str) -> Result<Self, PasswordPolicyError> {
        let normalized = Self::normalize(raw);

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }
        if !normalized.chars().any(|ch| ch.is_ascii_digit()) {
            return Err(PasswordPolicyError::MissingDigit);
        }
        if normalized.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(PasswordPolicyError::MissingSymbol);
        }

        Ok(Self(normalized.to_string()))
    }

    /// Wrap a submitted login password. No policy is applied.
    pub fn for_verification(raw: &str) -> Self {
        Self(Self::normalize(raw).to_string())
    }

    fn normalize(raw: &str) -> Zeroizing<String> {
        Zeroizing::new(raw.nfkc().collect())
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash with Argon2id (default OWASP parameters: m=19456, t=2, p=1).
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(&self.peppered(pepper), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a PHC string read back from storage.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Constant-time check of `password` against this hash.
    ///
    /// `pepper` must be the one used when hashing.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(&password.peppered(pepper), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_digit_and_symbol() {
        assert!(ClearTextPassword::new("Secret#2024").is_ok());
        assert!(ClearTextPassword::new("abcdefg1 ").is_ok());
    }

    #[test]
    fn test_policy_rejections() {
        assert_eq!(
            ClearTextPassword::new("").unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert!(matches!(
            ClearTextPassword::new("a1#b").unwrap_err(),
            PasswordPolicyError::TooShort { min: 8, actual: 4 }
        ));
        assert!(matches!(
            ClearTextPassword::new(&format!("1#{}", "a".repeat(MAX_PASSWORD_LENGTH))).unwrap_err(),
            PasswordPolicyError::TooLong { .. }
        ));
        assert_eq!(
            ClearTextPassword::new("NoDigits#here").unwrap_err(),
            PasswordPolicyError::MissingDigit
        );
        assert_eq!(
            ClearTextPassword::new("NoSymbol2024").unwrap_err(),
            PasswordPolicyError::MissingSymbol
        );
        assert_eq!(
            ClearTextPassword::new("bell\u{7}char1").unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_non_ascii_letter_counts_as_symbol() {
        assert!(ClearTextPassword::new("motdepassé1").is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("Secret#2024").unwrap();
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&ClearTextPassword::for_verification("Secret#2024"), None));
        assert!(!hashed.verify(&ClearTextPassword::for_verification("Secret#2025"), None));
        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_pepper_must_match() {
        let password = ClearTextPassword::new("Secret#2024").unwrap();
        let hashed = password.hash(Some(b"pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"pepper")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"other")));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let password = ClearTextPassword::new("Secret#2024").unwrap();
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_phc_string_from_storage() {
        let password = ClearTextPassword::new("Secret#2024").unwrap();
        let stored = password.hash(None).unwrap().as_phc_string().to_string();

        let restored = HashedPassword::from_phc_string(stored).unwrap();
        assert!(restored.verify(&password, None));
        assert!(HashedPassword::from_phc_string("plaintext").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::for_verification("hunter2!");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter2"));
    }
}
