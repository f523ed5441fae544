//! HTTP-facing functionality: security gates and their error types.

pub mod error;
pub mod security;
