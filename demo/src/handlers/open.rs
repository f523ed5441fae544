//! Open routes. No key is involved anywhere on these paths.

use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Home page - explains the layout of the demo.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body(
        "One API key, two gates.\n\
         Routes under /interceptor sit behind middleware; routes under /guard opt in per handler.\n\
         Send the key as an 'x-api-key' header or a '?token=' query parameter.\n",
    )
}

/// Health check for load balancers and probes.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
