//! Common test utilities and configuration.
//!
//! This module provides shared test infrastructure including:
//! - The test key and validator configuration
//! - Test handlers for each enforcement point
//! - Test app builders

use actix_web::{get, test, web, App, Error, HttpResponse, Responder};

use actix_keygate_core::http::security::api_key::{
    ApiKeyConfig, ApiKeySecret, ApiKeyValidator, KeyLocation, API_KEY_HEADER, TOKEN_QUERY_PARAM,
};
use actix_keygate_core::http::security::{ApiKeyFirewall, RequireApiKey};

// =============================================================================
// Test Configuration
// =============================================================================

/// The key the test apps accept.
pub const TEST_KEY: &str = "abc123";

/// Creates a validator for `secret`, reading the key from the default
/// header first, the `token` query parameter second.
pub fn test_validator(secret: &str) -> ApiKeyValidator {
    ApiKeyValidator::new(ApiKeySecret::new(secret)).config(
        ApiKeyConfig::header(API_KEY_HEADER).add_location(KeyLocation::query(TOKEN_QUERY_PARAM)),
    )
}

// =============================================================================
// Test Handlers
// =============================================================================

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("home")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[get("/report")]
pub async fn intercepted_report() -> impl Responder {
    HttpResponse::Ok().body("intercepted report")
}

#[get("/data")]
pub async fn intercepted_data() -> impl Responder {
    HttpResponse::Ok().body("intercepted data")
}

#[get("/status")]
pub async fn intercepted_status() -> impl Responder {
    HttpResponse::Ok().body("intercepted status")
}

#[get("/guard/report")]
pub async fn guarded_report(_key: RequireApiKey) -> impl Responder {
    HttpResponse::Ok().body("guarded report")
}

#[get("/guard/open")]
pub async fn guard_free() -> impl Responder {
    HttpResponse::Ok().body("no guard here")
}

// =============================================================================
// Test App Builders
// =============================================================================

/// Creates a test application mirroring the demo binary's layout: open
/// routes at the top, the firewall over `/interceptor` (with `/status`
/// exempt), and guard-protected routes next to an unguarded one.
pub async fn create_test_app(
    secret: &str,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = Error,
> {
    let validator = test_validator(secret);

    test::init_service(
        App::new()
            .app_data(web::Data::new(validator.clone()))
            .service(index)
            .service(health)
            .service(
                web::scope("/interceptor")
                    .wrap(ApiKeyFirewall::new(validator).exempt("^/interceptor/status$"))
                    .service(intercepted_report)
                    .service(intercepted_data)
                    .service(intercepted_status),
            )
            .service(guarded_report)
            .service(guard_free),
    )
    .await
}

/// Creates an application that never registered a validator. Guarded
/// routes must reject; a wiring mistake is not an open door.
pub async fn create_unwired_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = Error,
> {
    test::init_service(App::new().service(guarded_report).service(guard_free)).await
}
