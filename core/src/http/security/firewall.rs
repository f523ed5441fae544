//! Global API key firewall middleware.
//!
//! # Overview
//! Pipeline-stage enforcement: the firewall sits in front of every route it
//! wraps and inspects each request before routing happens. Requests without
//! a valid key are answered with `401 Unauthorized` directly from the
//! middleware; the wrapped services never see them.
//!
//! The verdict comes from the shared [`ApiKeyValidator`], the same
//! decision procedure the per-route [`RequireApiKey`] extractor uses.
//!
//! # Usage
//! ```ignore
//! use actix_web::{web, App};
//! use actix_keygate_core::http::security::ApiKeyFirewall;
//! use actix_keygate_core::http::security::api_key::{ApiKeySecret, ApiKeyValidator};
//!
//! let validator = ApiKeyValidator::new(ApiKeySecret::new("abc123"));
//!
//! App::new().service(
//!     web::scope("/api")
//!         .wrap(ApiKeyFirewall::new(validator).exempt("^/api/status$"))
//!         // ... routes
//! );
//! ```
//!
//! [`RequireApiKey`]: crate::http::security::RequireApiKey

use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpResponse};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use regex::Regex;

use crate::http::security::api_key::{ApiKeyValidator, AuthOutcome};

/// Body of the firewall's `401` when no key was presented.
pub const MISSING_KEY_BODY: &str = "API key is missing.";

/// Body of the firewall's `401` when the presented key does not match.
pub const INVALID_KEY_BODY: &str = "Invalid API Key.";

/// API key firewall factory.
///
/// Wrap it around an `App` or a `Scope`; every request passing through is
/// validated. Paths matching an exempt pattern skip validation entirely,
/// which keeps things like health probes reachable without a key.
#[derive(Clone)]
pub struct ApiKeyFirewall {
    validator: ApiKeyValidator,
    exempt: Vec<Regex>,
}

impl ApiKeyFirewall {
    /// Creates a firewall that validates every request with `validator`.
    pub fn new(validator: ApiKeyValidator) -> Self {
        ApiKeyFirewall {
            validator,
            exempt: Vec::new(),
        }
    }

    /// Exempts paths matching `pattern` (a regex over the full request
    /// path) from validation.
    ///
    /// A pattern that fails to compile is dropped; the paths it would have
    /// exempted stay behind the firewall.
    pub fn exempt(mut self, pattern: &str) -> Self {
        if let Ok(re) = Regex::new(pattern) {
            self.exempt.push(re);
        }
        self
    }

    fn is_exempt(&self, path: &str) -> bool {
        self.exempt.iter().any(|re| re.is_match(path))
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyFirewall
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyFirewallService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ApiKeyFirewallService {
            service: Rc::new(service),
            firewall: self.clone(),
        })
    }
}

/// API key firewall service.
pub struct ApiKeyFirewallService<S> {
    service: Rc<S>,
    firewall: ApiKeyFirewall,
}

impl<S, B> Service<ServiceRequest> for ApiKeyFirewallService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if self.firewall.is_exempt(req.path()) {
            let fut = service.call(req);
            return Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            });
        }

        match self.firewall.validator.inspect(req.request()) {
            AuthOutcome::Accepted => {
                let fut = service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
            AuthOutcome::RejectedMissing => Box::pin(async move {
                Ok(req.into_response(
                    HttpResponse::Unauthorized()
                        .body(MISSING_KEY_BODY)
                        .map_into_right_body(),
                ))
            }),
            AuthOutcome::RejectedInvalid => Box::pin(async move {
                Ok(req.into_response(
                    HttpResponse::Unauthorized()
                        .body(INVALID_KEY_BODY)
                        .map_into_right_body(),
                ))
            }),
        }
    }
}
