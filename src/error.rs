//! Error types for bounce.
//!
//! The library has a single caller-visible failure mode: constructing a
//! [`Ball`](crate::Ball) with a degenerate trajectory. Everything after
//! construction is infallible - bad event data is clamped, not rejected.

use std::fmt;

/// Errors that can occur when constructing a ball.
#[derive(Debug, Clone, PartialEq)]
pub enum BallError {
    /// Start or destination coordinate is NaN or infinite.
    NonFiniteCoordinate,
    /// Speed must be finite and strictly positive.
    InvalidSpeed(f32),
    /// Arrival window (eta) must be finite and strictly positive.
    InvalidEta(f32),
    /// Start and destination coincide, so no heading can be derived.
    DegeneratePath,
}

impl fmt::Display for BallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallError::NonFiniteCoordinate => {
                write!(f, "Start and destination coordinates must be finite")
            }
            BallError::InvalidSpeed(s) => {
                write!(f, "Speed must be finite and > 0, got {}", s)
            }
            BallError::InvalidEta(e) => {
                write!(f, "Arrival window (eta) must be finite and > 0, got {}", e)
            }
            BallError::DegeneratePath => {
                write!(f, "Start and destination coincide; no heading can be derived")
            }
        }
    }
}

impl std::error::Error for BallError {}
