//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::role::Role;

pub const DEFAULT_GUEST_PRINCIPAL: &str = "guestUser";
pub const DEFAULT_GUEST_ROLE: &str = "ROLE_GUEST";

/// How requests without a session get an identity. Fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Username and password posted to `/login`
    #[default]
    Form,
    /// Every request without a session runs as this fixed guest
    AutoLogin { principal: String, role: Role },
}

impl AuthMode {
    pub fn guest() -> Self {
        AuthMode::AutoLogin {
            principal: DEFAULT_GUEST_PRINCIPAL.to_string(),
            role: Role::new(DEFAULT_GUEST_ROLE),
        }
    }

    /// The identity given to session-less requests, if any.
    pub fn guest_identity(&self) -> Option<Identity> {
        match self {
            AuthMode::Form => None,
            AuthMode::AutoLogin { principal, role } => {
                Some(Identity::new(principal.clone(), role.clone()))
            }
        }
    }

    pub fn accepts_form_login(&self) -> bool {
        matches!(self, AuthMode::Form)
    }
}

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub mode: AuthMode,
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Where a successful login lands
    pub landing_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::Form,
            session_cookie_name: "auth_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            landing_path: "/bidList/list".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
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

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::hours(12))
    }

    /// Attributes of the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: Some(self.session_ttl.as_secs()),
            ..CookieConfig::named(self.session_cookie_name.clone())
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
