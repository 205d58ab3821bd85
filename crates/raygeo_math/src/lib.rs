// Re-export glam for convenience
pub use glam::*;

// raygeo math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Double-precision 3-vector used for directions, offsets and results (km).
pub type Vector3 = DVec3;

/// Integer 3-vector for exact command-line components (km).
pub type IntVector3 = I64Vec3;
