//! Routes behind the API key firewall.
//!
//! Mounted under the `/interceptor` scope in `main`. None of these handlers
//! mention the key: by the time one runs, the middleware has already turned
//! away any request without a valid key.

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

use super::Report;

/// Demo payload, protected by the firewall around the whole scope.
#[get("/report")]
pub async fn report() -> impl Responder {
    HttpResponse::Ok().json(Report::sample("interceptor"))
}

/// A second protected route, to make the blanket coverage visible.
#[get("/data")]
pub async fn data() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "items": ["alpha", "beta", "gamma"],
        "count": 3
    }))
}

/// Exempted from the firewall (see the `exempt` pattern in `main`), so
/// monitoring can probe the protected scope without a key.
#[get("/status")]
pub async fn status() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok", "gate": "interceptor" }))
}
