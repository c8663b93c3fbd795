//! Value Object Module

pub mod role;
