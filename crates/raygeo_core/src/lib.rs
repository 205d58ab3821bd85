//! raygeo core - ray / reference ellipsoid intersection.
//!
//! This crate provides:
//!
//! - **Reference ellipsoid**: `Ellipsoid` with the `R_E_KM` / `E_E` constants
//! - **Intersection solver**: closed-form quadratic solve with an explicit
//!   "no intersection" outcome
//! - **Batch solving**: independent queries evaluated in parallel
//!
//! # Example
//!
//! ```
//! use raygeo_core::solve;
//! use raygeo_math::Vector3;
//!
//! let hit = solve(Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 0.0, 10000.0))?;
//! assert!(hit.is_some());
//! # Ok::<(), raygeo_core::SolveError>(())
//! ```

pub mod batch;
pub mod ellipsoid;
pub mod error;
pub mod quadratic;
pub mod solver;

// Re-export commonly used types
pub use batch::{solve_batch, Outcome, RayQuery};
pub use ellipsoid::{Ellipsoid, E_E, R_E_KM};
pub use error::{EllipsoidError, SolveError, SolveResult};
pub use quadratic::QuadraticCoefficients;
pub use solver::{solve, Intersection, Root};
