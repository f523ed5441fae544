//! API key validation for Actix Web.
//!
//! # Overview
//!
//! A single pre-shared key protects the service: clients include it with
//! each request, the server compares it against the configured secret.
//! This is the usual scheme for:
//! - Service-to-service communication
//! - Internal tools and demo deployments
//! - Simple authentication without user sessions
//!
//! Everything in this module is about reaching a verdict. Turning the
//! verdict into an HTTP response is done by the enforcement adapters in
//! the parent module, both of which call the same [`ApiKeyValidator`].
//!
//! # Key Locations
//!
//! The key can be extracted from:
//! - **Header** (default): `x-api-key: your-api-key`
//! - **Query parameter**: `?token=your-api-key` (less secure, shows up in logs)
//!
//! # Usage
//!
//! ```ignore
//! use actix_keygate_core::http::security::api_key::{
//!     ApiKeyConfig, ApiKeySecret, ApiKeyValidator, KeyLocation, TOKEN_QUERY_PARAM,
//! };
//!
//! let secret = ApiKeySecret::new(std::env::var("API_KEY").unwrap_or_default());
//!
//! let validator = ApiKeyValidator::new(secret).config(
//!     ApiKeyConfig::new().add_location(KeyLocation::query(TOKEN_QUERY_PARAM)),
//! );
//! ```
//!
//! # Verdicts
//!
//! [`ApiKeyValidator::inspect`] distinguishes three outcomes:
//!
//! | Request | Outcome |
//! |---------|---------|
//! | No key in any configured location | [`AuthOutcome::RejectedMissing`] |
//! | Key present but not equal to the secret | [`AuthOutcome::RejectedInvalid`] |
//! | Key present and equal to the secret | [`AuthOutcome::Accepted`] |
//!
//! An empty configured secret never equals anything, including an empty
//! presented key, so an unconfigured deployment rejects every request.
//!
//! # Security Considerations
//!
//! 1. **Use HTTPS** - the key is transmitted in plaintext
//! 2. **Prefer the header** - query strings end up in access logs
//! 3. **Comparison is constant time** - see [`ApiKeySecret::matches`]

mod config;
mod secret;
mod validator;

pub use config::{
    ApiKeyConfig, KeyLocation, API_KEY_HEADER, API_KEY_QUERY_PARAM, TOKEN_QUERY_PARAM,
};
pub use secret::ApiKeySecret;
pub use validator::{ApiKeyValidator, AuthOutcome};
