//! Application Configuration
//!
//! Configuration for the Catalog application layer.

use platform::crypto::random_secret;
use platform::flash::FlashCodec;

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// HMAC key for the flash cookie (32 bytes)
    pub flash_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// Password pepper, shared with the authenticator
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            flash_secret: [0u8; 32],
            cookie_secure: true,
            password_pepper: None,
        }
    }
}

impl CatalogConfig {
    /// Create config with a random flash secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            flash_secret: random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn flash_codec(&self) -> FlashCodec {
        FlashCodec::new(self.flash_secret, self.cookie_secure)
    }
}
