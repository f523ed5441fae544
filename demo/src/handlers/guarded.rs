//! Routes that opt in to the per-route guard.
//!
//! Nothing wraps these; protection is the `RequireApiKey` parameter in the
//! handler signature, route by route.

use actix_web::{get, web, HttpResponse, Responder};

use actix_keygate_core::http::security::RequireApiKey;

use super::Report;

/// Protected: listing `RequireApiKey` is the opt-in.
#[get("/guard/report")]
pub async fn report(_key: RequireApiKey) -> impl Responder {
    HttpResponse::Ok().json(Report::sample("guard"))
}

/// Protected, and composes with other extractors as usual.
#[get("/guard/echo/{name}")]
pub async fn echo(_key: RequireApiKey, name: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().body(format!("echo: {}", name.into_inner()))
}

/// Not protected: same corner of the app, no guard parameter, so the
/// validator never runs for it.
#[get("/guard/open")]
pub async fn open_neighbor() -> impl Responder {
    HttpResponse::Ok().body("open route, no key required")
}
