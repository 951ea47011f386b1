//! Errors produced by the pure core

use thiserror::Error;

/// A measured value that cannot be scored.
///
/// Only present values are rejected (negative, non-finite, or out of physical
/// range); absent optional fields are valid inputs and never produce this.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field} reading: {value}")]
pub struct InvalidReading {
    pub field: &'static str,
    pub value: f64,
}
