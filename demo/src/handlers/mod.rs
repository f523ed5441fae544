//! Route handlers organized by enforcement point.

use serde::Serialize;

pub mod guarded;
pub mod intercepted;
pub mod open;

/// Payload served by the protected demo routes.
///
/// The `gate` field names which enforcement point let the request in, so
/// responses show where they came through.
#[derive(Debug, Serialize)]
pub struct Report {
    pub gate: &'static str,
    pub readings: Vec<f64>,
    pub unit: &'static str,
}

impl Report {
    pub fn sample(gate: &'static str) -> Self {
        Report {
            gate,
            readings: vec![12.5, 14.1, 13.8],
            unit: "celsius",
        }
    }
}
