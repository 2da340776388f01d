//! Error taxonomy for the core operations.
//!
//! The three entry points are pure and deterministic: they either succeed or
//! fail immediately, with no retries or recovery. The only failure class is
//! malformed input; out-of-range *parameter* values are normalized (clamped,
//! forced odd, swapped) rather than rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SketchError {
    /// Malformed or empty image input: zero dimensions, wrong channel count
    /// for the called operation, or a buffer that does not match the stated
    /// geometry.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
