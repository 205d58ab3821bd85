//! Coefficients of the ray / ellipsoid quadratic `a t^2 + b t + c = 0`.

use raygeo_math::{IntVector3, Ray};

use crate::ellipsoid::Ellipsoid;

/// Quadratic coefficients for one ray against one ellipsoid.
///
/// `c` subtracts the equatorial radius itself, not its square. Both this and
/// the uniform division by `k` are kept exactly as the reference formulation
/// has them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticCoefficients {
    pub fn for_ray(ellipsoid: &Ellipsoid, ray: &Ray) -> Self {
        let d = ray.direction();
        let o = ray.origin();
        Self::from_sums(ellipsoid, d.length_squared(), d.dot(o), o.length_squared())
    }

    /// Coefficients for integer components.
    ///
    /// The three sums are formed exactly in `i128` and rounded to f64 once,
    /// so large components lose no precision before the division by `k`.
    pub fn for_integer_ray(ellipsoid: &Ellipsoid, direction: IntVector3, origin: IntVector3) -> Self {
        let d = direction.to_array().map(i128::from);
        let o = origin.to_array().map(i128::from);

        let dd: i128 = d.iter().map(|v| v * v).sum();
        let dc: i128 = d.iter().zip(&o).map(|(v, w)| v * w).sum();
        let cc: i128 = o.iter().map(|v| v * v).sum();

        Self::from_sums(ellipsoid, dd as f64, dc as f64, cc as f64)
    }

    /// Build from `|d|^2`, `d . c` and `|c|^2`.
    pub fn from_sums(ellipsoid: &Ellipsoid, dd: f64, dc: f64, cc: f64) -> Self {
        let k = ellipsoid.flattening_factor();

        let a = dd / k;
        let b = 2.0 * (dc / k);
        let c = cc / k - ellipsoid.equatorial_radius_km;

        Self { a, b, c }
    }

    /// True when all three coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    /// `b^2 - 4ac`
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - (4.0 * self.a * self.c)
    }

    /// `(-b + sqrt(disc)) / 2a`, the larger root for `a > 0`.
    #[inline]
    pub fn far_root(&self, disc: f64) -> f64 {
        (-self.b + disc.sqrt()) / (2.0 * self.a)
    }

    /// `(-b - sqrt(disc)) / 2a`, the smaller root for `a > 0`.
    #[inline]
    pub fn near_root(&self, disc: f64) -> f64 {
        (-self.b - disc.sqrt()) / (2.0 * self.a)
    }

    /// Evaluate `a t^2 + b t + c`.
    pub fn evaluate(&self, t: f64) -> f64 {
        self.a * t * t + self.b * t + self.c
    }
}
