//! Server Configuration
//!
//! Everything the binary reads from the environment, resolved once at startup.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, bail};
use auth::application::config::{DEFAULT_GUEST_PRINCIPAL, DEFAULT_GUEST_ROLE};
use auth::{AuthConfig, AuthMode, Role};
use catalog::CatalogConfig;
use platform::crypto::{from_base64, hmac_sha256};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` runs on the in-memory stores
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub auth: Arc<AuthConfig>,
    pub catalog: CatalogConfig,
    pub bootstrap_admin_password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let mode = match var("AUTH_MODE").as_deref().map(str::trim) {
            None | Some("form") => AuthMode::Form,
            Some("auto") => AuthMode::AutoLogin {
                principal: var("GUEST_USERNAME")
                    .unwrap_or_else(|| DEFAULT_GUEST_PRINCIPAL.to_string()),
                role: Role::new(var("GUEST_ROLE").as_deref().unwrap_or(DEFAULT_GUEST_ROLE)),
            },
            Some(other) => bail!("AUTH_MODE must be `form` or `auto`, got `{}`", other),
        };

        let session_secret = match var("SESSION_SECRET") {
            Some(b64) => decode_secret(&b64)?,
            None if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using a random secret");
                platform::crypto::random_secret()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };

        let cookie_secure = match var("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).context("COOKIE_SECURE must be true or false")?,
            None => !cfg!(debug_assertions),
        };

        let password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        let auth = AuthConfig {
            mode,
            session_secret,
            cookie_secure,
            password_pepper: password_pepper.clone(),
            ..AuthConfig::default()
        };

        let catalog = CatalogConfig {
            flash_secret: hmac_sha256(&session_secret, b"flash-cookie"),
            cookie_secure,
            password_pepper,
        };

        Ok(Self {
            database_url: var("DATABASE_URL"),
            bind_addr,
            max_connections,
            auth: Arc::new(auth),
            catalog,
            bootstrap_admin_password: var("BOOTSTRAP_ADMIN_PASSWORD"),
        })
    }
}

fn decode_secret(b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = from_base64(b64).context("SESSION_SECRET must be base64")?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len())
    })
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("not a boolean: `{}`", other),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use platform::crypto::to_base64;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.database_url.is_none());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.auth.mode, AuthMode::Form);
        assert!(config.bootstrap_admin_password.is_none());
    }

    #[test]
    fn test_auto_mode_with_custom_guest() {
        let config = load(&[
            ("AUTH_MODE", "auto"),
            ("GUEST_USERNAME", "visitor"),
            ("GUEST_ROLE", "USER"),
        ])
        .unwrap();

        let guest = config.auth.mode.guest_identity().unwrap();
        assert_eq!(guest.principal, "visitor");
        assert!(guest.has_role("USER"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(load(&[("AUTH_MODE", "oauth")]).is_err());
    }

    #[test]
    fn test_session_secret() {
        let secret = [7u8; 32];
        let config = load(&[("SESSION_SECRET", to_base64(&secret).as_str())]).unwrap();
        assert_eq!(config.auth.session_secret, secret);
        assert_ne!(config.catalog.flash_secret, secret);

        assert!(load(&[("SESSION_SECRET", to_base64(&[1u8; 16]).as_str())]).is_err());
        assert!(load(&[("SESSION_SECRET", "not base64!")]).is_err());
    }

    #[test]
    fn test_cookie_secure_and_pepper() {
        let config = load(&[("COOKIE_SECURE", "false"), ("PASSWORD_PEPPER", "pep")]).unwrap();
        assert!(!config.auth.cookie_secure);
        assert!(!config.catalog.cookie_secure);
        assert_eq!(config.auth.pepper(), Some(b"pep".as_slice()));
        assert_eq!(config.catalog.password_pepper.as_deref(), Some(b"pep".as_slice()));

        assert!(load(&[("COOKIE_SECURE", "maybe")]).is_err());
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(load(&[("BIND_ADDR", "nowhere")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "-1")]).is_err());
    }
}
