//! Actix Keygate Demo Application
//!
//! One API key, one decision procedure, two enforcement points side by side:
//!
//! - `/interceptor/*` is wrapped in the [`ApiKeyFirewall`] middleware; every
//!   route under it is protected without the handlers knowing.
//! - `/guard/*` routes opt in individually with the [`RequireApiKey`]
//!   extractor parameter; the one that doesn't stays open.
//!
//! ## Running
//!
//! ```bash
//! API_KEY=abc123 cargo run -p actix-keygate-demo
//! ```
//!
//! ## Testing with curl
//!
//! ```bash
//! # Without a key (401, "API key is missing.")
//! curl http://127.0.0.1:8080/interceptor/report
//!
//! # With the key in the header
//! curl -H "x-api-key: abc123" http://127.0.0.1:8080/interceptor/report
//!
//! # With the key in the query string
//! curl "http://127.0.0.1:8080/guard/report?token=abc123"
//!
//! # Routes that never ask for a key
//! curl http://127.0.0.1:8080/health
//! curl http://127.0.0.1:8080/guard/open
//! ```

mod handlers;

use std::env;

use actix_web::{middleware, web, App, HttpServer};

use actix_keygate_core::http::security::api_key::{
    ApiKeyConfig, ApiKeySecret, ApiKeyValidator, KeyLocation, API_KEY_HEADER, TOKEN_QUERY_PARAM,
};
use actix_keygate_core::http::security::ApiKeyFirewall;

/// Runtime configuration, read once at startup.
struct AppConfig {
    /// The shared secret. Empty when `API_KEY` is unset; the gates then
    /// reject everything rather than admit everything.
    api_key: String,
    bind_addr: String,
}

impl AppConfig {
    fn from_env() -> Self {
        AppConfig {
            api_key: env::var("API_KEY").unwrap_or_default(),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
        }
    }
}

/// Creates the validator both gates share.
///
/// Accepts the key from the `x-api-key` header first, then from the
/// `?token=` query parameter.
fn validator(config: &AppConfig) -> ApiKeyValidator {
    ApiKeyValidator::new(ApiKeySecret::new(config.api_key.clone())).config(
        ApiKeyConfig::header(API_KEY_HEADER).add_location(KeyLocation::query(TOKEN_QUERY_PARAM)),
    )
}

fn print_startup_info(config: &AppConfig) {
    println!("=== Actix Keygate Demo (one validator, two gates) ===");
    println!();
    println!("Server: http://{}", config.bind_addr);
    println!();
    println!("Routes:");
    println!("  GET /                    - Home (open)");
    println!("  GET /health              - Health check (open)");
    println!("  GET /interceptor/report  - [firewall] key required");
    println!("  GET /interceptor/data    - [firewall] key required");
    println!("  GET /interceptor/status  - [firewall, exempt] open");
    println!("  GET /guard/report        - [guard] key required");
    println!("  GET /guard/echo/{{name}}   - [guard] key required");
    println!("  GET /guard/open          - no guard parameter, open");
    println!();
    println!("Try:");
    println!("  curl http://{}/interceptor/report                      # 401", config.bind_addr);
    println!(
        "  curl -H 'x-api-key: <key>' http://{}/interceptor/report",
        config.bind_addr
    );
    println!("  curl 'http://{}/guard/report?token=<key>'", config.bind_addr);
    println!("  curl http://{}/guard/open                              # 200", config.bind_addr);
    println!();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    let validator = validator(&config);
    if !validator.is_usable() {
        log::warn!("API_KEY is unset or empty; both gates will reject every request");
    }

    print_startup_info(&config);

    // One validator instance, shared: the firewall holds a clone, the guard
    // finds it through app data.
    let validator_data = web::Data::new(validator.clone());
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(validator_data.clone())
            // Open routes
            .service(handlers::open::index)
            .service(handlers::open::health)
            // Firewall-protected scope
            .service(
                web::scope("/interceptor")
                    .wrap(ApiKeyFirewall::new(validator.clone()).exempt("^/interceptor/status$"))
                    .service(handlers::intercepted::report)
                    .service(handlers::intercepted::data)
                    .service(handlers::intercepted::status),
            )
            // Guard-protected routes (and their open neighbor)
            .service(handlers::guarded::report)
            .service(handlers::guarded::echo)
            .service(handlers::guarded::open_neighbor)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
