//! Rejection errors for the per-route guard.

use actix_web::{error, http::StatusCode, HttpResponse, HttpResponseBuilder};
use derive_more::{Display, Error};

/// Why [`RequireApiKey`] refused a request.
///
/// Rendered as a `401 Unauthorized` with the display string as a plain-text
/// body. The wording differs slightly from the firewall's responses; each
/// enforcement point keeps its own phrasing so callers can tell which gate
/// turned them away.
///
/// [`RequireApiKey`]: crate::http::security::RequireApiKey
#[derive(Debug, Display, Error)]
pub enum GuardError {
    /// No API key was found in the request.
    #[display("API Key missing.")]
    MissingKey,

    /// The presented API key does not match the configured secret.
    #[display("Invalid API Key.")]
    InvalidKey,
}

impl error::ResponseError for GuardError {
    fn status_code(&self) -> StatusCode {
        match *self {
            GuardError::MissingKey => StatusCode::UNAUTHORIZED,
            GuardError::InvalidKey => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponseBuilder::new(self.status_code()).body(self.to_string())
    }
}
