//! Security module: API key validation and its two enforcement points.
//!
//! # Module Structure
//!
//! - `api_key` - The shared decision procedure (ApiKeyValidator) plus its
//!   configuration and secret types
//! - `firewall` - Global middleware enforcement (ApiKeyFirewall)
//! - `guard` - Selective per-route enforcement (RequireApiKey)
//!
//! # Choosing an Enforcement Point
//!
//! The firewall protects everything it wraps and is impossible to forget
//! on a new route; the guard protects exactly the routes that ask for it
//! and composes like any other extractor. Rejections differ only in how
//! they are rendered: the firewall writes its `401` bodies itself, the
//! guard goes through [`GuardError`]'s `ResponseError` impl.
//!
//! [`GuardError`]: crate::http::error::GuardError

// Re-exports for convenience
pub use firewall::{ApiKeyFirewall, ApiKeyFirewallService, INVALID_KEY_BODY, MISSING_KEY_BODY};
pub use guard::RequireApiKey;

// Public modules
pub mod api_key;
pub mod firewall;
pub mod guard;
