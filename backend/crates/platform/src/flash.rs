//! Flash Messages
//!
//! A flash is a one-shot message attached to a redirect and shown by the
//! next rendered page. It travels in a short-lived cookie whose value is
//! `base64url(json)` signed with HMAC-SHA256, and is cleared as soon as a
//! page consumes it.

use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::cookie::{CookieConfig, extract_cookie};
use crate::crypto::{open_token, sign_token};
use crate::view::View;

pub const FLASH_COOKIE_NAME: &str = "flash";

/// Lifetime of an unread flash cookie.
const FLASH_MAX_AGE_SECS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Signs, reads and clears the flash cookie.
#[derive(Clone)]
pub struct FlashCodec {
    secret: [u8; 32],
    cookie: CookieConfig,
}

impl FlashCodec {
    pub fn new(secret: [u8; 32], secure: bool) -> Self {
        Self {
            secret,
            cookie: CookieConfig {
                secure,
                max_age_secs: Some(FLASH_MAX_AGE_SECS),
                ..CookieConfig::named(FLASH_COOKIE_NAME)
            },
        }
    }

    pub fn encode(&self, flash: &Flash) -> String {
        // Serializing two plain fields cannot fail.
        let json = serde_json::to_vec(flash).unwrap_or_default();
        sign_token(&self.secret, &URL_SAFE_NO_PAD.encode(json))
    }

    /// `None` for a forged, truncated or unreadable cookie.
    pub fn decode(&self, token: &str) -> Option<Flash> {
        let payload = open_token(&self.secret, token)?;
        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }

    pub fn read(&self, headers: &HeaderMap) -> Option<Flash> {
        let token = extract_cookie(headers, &self.cookie.name)?;
        let flash = self.decode(&token);
        if flash.is_none() {
            tracing::debug!("Ignoring flash cookie with a bad signature");
        }
        flash
    }

    /// 303 to `location`, carrying `flash` for the next page.
    pub fn redirect(&self, location: &str, flash: Option<Flash>) -> Response {
        let mut response = Redirect::to(location).into_response();
        if let Some(flash) = flash {
            response
                .headers_mut()
                .append(header::SET_COOKIE, self.cookie.set_header(&self.encode(&flash)));
        }
        response
    }

    /// Render `view` with the pending flash, if any, and consume it.
    pub fn render(&self, headers: &HeaderMap, view: View) -> Response {
        match self.read(headers) {
            Some(flash) => {
                let mut response = view.with_flash(flash).into_response();
                response
                    .headers_mut()
                    .append(header::SET_COOKIE, self.clear_header());
                response
            }
            None => view.into_response(),
        }
    }

    pub fn clear_header(&self) -> HeaderValue {
        self.cookie.delete_header()
    }
}
