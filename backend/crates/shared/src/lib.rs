//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary that every back-office crate agrees on:
//! - The unified [`AppError`](error::app_error::AppError) and its HTTP classification
//! - Field-level validation results used by every form workflow
//!
//! Only things whose meaning is identical across the auth and catalog
//! domains belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod validation;
