//! Cryptographic Utilities
//!
//! Signed tokens have the form `<payload>.<base64url(HMAC-SHA256(key, payload))>`.
//! The payload itself must not contain `.`.

use base64::{Engine, engine::general_purpose};
use hmac::{Hmac, Mac};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Random 32-byte signing key.
pub fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}

/// Encode bytes as standard base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode standard base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

fn mac_for(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC can take key of any size")
}

/// Compute HMAC-SHA256
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = mac_for(key);
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Append an HMAC signature to `payload`.
pub fn sign_token(key: &[u8], payload: &str) -> String {
    let signature = hmac_sha256(key, payload.as_bytes());
    format!(
        "{}.{}",
        payload,
        general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Return the payload of a token whose signature verifies under `key`.
///
/// Comparison is constant-time.
pub fn open_token<'a>(key: &[u8], token: &'a str) -> Option<&'a str> {
    let (payload, signature_b64) = token.rsplit_once('.')?;
    let signature = general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .ok()?;

    let mut mac = mac_for(key);
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).ok()?;

    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(mac.to_vec(), expected);
    }

    #[test]
    fn test_random_secret() {
        let a = random_secret();
        let b = random_secret();
        assert_ne!(a, b);
        assert_eq!(random_bytes(16).len(), 16);
    }

    #[test]
    fn test_base64_roundtrip() {
        let secret = random_secret();
        let decoded = from_base64(&format!("{}\n", to_base64(&secret))).unwrap();
        assert_eq!(decoded, secret);
    }

    #[test]
    fn test_signed_token() {
        let key = [7u8; 32];
        let token = sign_token(&key, "3f2b9c1e-0000-4000-8000-000000000000");

        assert_eq!(
            open_token(&key, &token),
            Some("3f2b9c1e-0000-4000-8000-000000000000")
        );
        assert_eq!(open_token(&[8u8; 32], &token), None);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let key = [7u8; 32];
        let token = sign_token(&key, "payload");
        let (_, signature) = token.split_once('.').unwrap();

        assert_eq!(open_token(&key, &format!("payloaX.{signature}")), None);
        assert_eq!(open_token(&key, "payload"), None);
        assert_eq!(open_token(&key, "payload.!!!"), None);
    }
}
