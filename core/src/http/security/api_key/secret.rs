//! The configured API key and its comparison rules.

use std::fmt;

use subtle::ConstantTimeEq;

/// The server-side API key that presented keys are compared against.
///
/// An empty secret is representable but never matches anything, so a
/// deployment that forgot to configure its key rejects every request
/// instead of accepting every request.
///
/// # Example
///
/// ```ignore
/// use actix_keygate_core::http::security::api_key::ApiKeySecret;
///
/// let secret = ApiKeySecret::new(std::env::var("API_KEY").unwrap_or_default());
/// if !secret.is_usable() {
///     log::warn!("API_KEY is not set; all requests will be rejected");
/// }
/// ```
#[derive(Clone)]
pub struct ApiKeySecret(String);

impl ApiKeySecret {
    /// Creates a secret from the configured key value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Creates a secret from an optional source such as an environment
    /// variable. `None` behaves like an empty secret.
    pub fn from_option(secret: Option<String>) -> Self {
        Self(secret.unwrap_or_default())
    }

    /// Returns whether the secret can ever accept a request.
    ///
    /// A secret is unusable when it is empty. Callers that want to surface
    /// misconfiguration at startup should check this and log a warning.
    pub fn is_usable(&self) -> bool {
        !self.0.is_empty()
    }

    /// Compares a presented key against the secret in constant time.
    ///
    /// Always `false` for an unusable secret, whatever the candidate.
    pub fn matches(&self, candidate: &str) -> bool {
        if !self.is_usable() {
            return false;
        }
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for ApiKeySecret {
    /// Never prints the key material.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_usable() {
            write!(f, "ApiKeySecret(****)")
        } else {
            write!(f, "ApiKeySecret(<empty>)")
        }
    }
}

/// Compares two byte strings without an early exit on the first mismatch.
///
/// Both inputs are padded to a common length so `ct_eq` always walks the
/// same number of bytes; the length check happens separately afterwards.
fn constant_time_eq(expected: &[u8], provided: &[u8]) -> bool {
    let max_len = expected.len().max(provided.len());

    let mut padded_expected = vec![0u8; max_len];
    let mut padded_provided = vec![0u8; max_len];
    padded_expected[..expected.len()].copy_from_slice(expected);
    padded_provided[..provided.len()].copy_from_slice(provided);

    let bytes_match: bool = padded_expected.ct_eq(&padded_provided).into();
    bytes_match && expected.len() == provided.len()
}
