//! Error types for E521 point construction.

use thiserror::Error;

/// Errors raised when turning integers into curve points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// No y-coordinate exists for the requested x: the radicand
    /// `(1 - x^2) / (1 + 376014 x^2)` is not a square mod p.
    #[error("invalid point: x-coordinate has no square root on E521")]
    InvalidPoint,

    /// The coordinates do not satisfy `x^2 + y^2 = 1 + d x^2 y^2 (mod p)`.
    #[error("coordinates do not lie on E521")]
    NotOnCurve,
}
