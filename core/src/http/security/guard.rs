//! Per-route API key guard.
//!
//! # Overview
//! Selective enforcement: a handler opts in by taking [`RequireApiKey`] as
//! a parameter, and only then is the request validated. Routes without the
//! parameter are untouched, whether or not a key is present. This is the
//! opposite trade-off from the [`ApiKeyFirewall`] middleware, which covers
//! everything it wraps; both call the same [`ApiKeyValidator`].
//!
//! The guard finds its validator in application data, so the app must
//! register one:
//!
//! ```ignore
//! App::new().app_data(web::Data::new(validator))
//! ```
//!
//! If no validator is registered the guard rejects the request. A wiring
//! mistake must not open a protected route.
//!
//! # Usage
//! ```ignore
//! use actix_web::{get, Responder};
//! use actix_keygate_core::http::security::RequireApiKey;
//!
//! #[get("/report")]
//! async fn report(_key: RequireApiKey) -> impl Responder {
//!     "only with a valid key"
//! }
//! ```
//!
//! [`ApiKeyFirewall`]: crate::http::security::ApiKeyFirewall

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::http::error::GuardError;
use crate::http::security::api_key::{ApiKeyValidator, AuthOutcome};

/// Extractor that admits a request only with a valid API key.
///
/// Carries no data; its presence in the signature is the protection.
///
/// # Errors
/// Responds `401 Unauthorized` with a plain-text body when the key is
/// missing ([`GuardError::MissingKey`]) or wrong ([`GuardError::InvalidKey`]).
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequest for RequireApiKey {
    type Error = GuardError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let outcome = match req.app_data::<web::Data<ApiKeyValidator>>() {
            Some(validator) => validator.inspect(req),
            // No validator registered: fail closed.
            None => AuthOutcome::RejectedInvalid,
        };

        match outcome {
            AuthOutcome::Accepted => ready(Ok(RequireApiKey)),
            AuthOutcome::RejectedMissing => ready(Err(GuardError::MissingKey)),
            AuthOutcome::RejectedInvalid => ready(Err(GuardError::InvalidKey)),
        }
    }
}
