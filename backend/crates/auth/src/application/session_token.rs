//! Session Token
//!
//! Cookie value `<session uuid>.<base64url(hmac)>`, signed with the
//! configured session secret.

use platform::crypto::{open_token, sign_token};
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

pub fn issue(config: &AuthConfig, session_id: Uuid) -> String {
    sign_token(&config.session_secret, &session_id.to_string())
}

/// Verify the signature and recover the session id.
pub fn parse(config: &AuthConfig, token: &str) -> AuthResult<Uuid> {
    let session_id = open_token(&config.session_secret, token).ok_or(AuthError::SessionInvalid)?;
    session_id.parse().map_err(|_| AuthError::SessionInvalid)
}
