//! # Actix Keygate
//!
//! API key authentication for Actix Web, enforced two ways from one
//! decision procedure.
//!
//! Every request is judged by the same rules, the
//! [`ApiKeyValidator`](http::security::api_key::ApiKeyValidator): find the
//! key in the configured locations, compare it against the configured
//! secret, produce one of three verdicts (accepted, missing, invalid).
//! What differs is where that procedure is hosted:
//!
//! - [`ApiKeyFirewall`](http::security::ApiKeyFirewall) is middleware.
//!   Wrapped around an `App` or `Scope`, it inspects every request before
//!   routing and answers `401 Unauthorized` itself. Coverage is the
//!   default; a new route cannot be forgotten.
//! - [`RequireApiKey`](http::security::RequireApiKey) is an extractor.
//!   A handler that lists it as a parameter is protected; every other
//!   handler stays open. Coverage is opt-in, per route.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use actix_web::{get, web, App, HttpServer, Responder};
//! use actix_keygate_core::http::security::{ApiKeyFirewall, RequireApiKey};
//! use actix_keygate_core::http::security::api_key::{ApiKeySecret, ApiKeyValidator};
//!
//! #[get("/selective")]
//! async fn selective(_key: RequireApiKey) -> impl Responder {
//!     "guarded route"
//! }
//!
//! let validator = ApiKeyValidator::new(ApiKeySecret::new("abc123"));
//!
//! App::new()
//!     .app_data(web::Data::new(validator.clone()))
//!     .service(
//!         web::scope("/api")
//!             .wrap(ApiKeyFirewall::new(validator))
//!             // every route in here is protected
//!     )
//!     .service(selective);
//! ```
//!
//! ## Modules
//!
//! - [`http::security`] - Validator, firewall middleware, route guard
//! - [`http::error`] - Error types

pub mod http;
