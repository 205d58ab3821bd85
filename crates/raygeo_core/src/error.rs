//! Error types for ellipsoid construction and intersection solving.

use thiserror::Error;

/// Errors raised when building an `Ellipsoid` from user parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EllipsoidError {
    #[error("equatorial radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("eccentricity must be finite and in [0, 1), got {0}")]
    InvalidEccentricity(f64),
}

/// Errors that can occur while intersecting a ray with the ellipsoid.
///
/// A missed ellipsoid is not an error; it is reported as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("degenerate ray direction: quadratic coefficient a is zero")]
    DegenerateDirection,

    #[error("ray components must be finite")]
    NonFiniteInput,

    #[error("ray components too large: quadratic coefficients overflow")]
    Overflow,
}

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;
