//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id) and the password policy
//! - HMAC-signed tokens and Base64 helpers
//! - Cookie building and parsing
//! - One-shot flash messages carried in a signed cookie
//! - The JSON view-model response every page is rendered as

pub mod cookie;
pub mod crypto;
pub mod flash;
pub mod password;
pub mod view;
