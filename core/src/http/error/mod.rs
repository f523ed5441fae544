//! HTTP error types.

mod guard_error;

pub use guard_error::GuardError;
