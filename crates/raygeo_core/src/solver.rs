//! Ray / ellipsoid intersection solver.
//!
//! Root selection tries the far root `(-b + sqrt(disc)) / 2a` first and only
//! falls back to the near root when the far root lies behind the ray origin.
//! The near root is then used whatever its sign. This is not a
//! nearest-forward-hit policy: when both roots are ahead of the origin the
//! farther crossing is returned.

use raygeo_math::{IntVector3, Interval, Ray, Vector3};
use serde::{Deserialize, Serialize};

use crate::ellipsoid::Ellipsoid;
use crate::error::{SolveError, SolveResult};
use crate::quadratic::QuadraticCoefficients;

/// Which root of the quadratic produced an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Root {
    /// `(-b + sqrt(disc)) / 2a`
    Far,
    /// `(-b - sqrt(disc)) / 2a`
    Near,
}

/// A ray / ellipsoid intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// Intersection point, `origin + t * direction`
    pub point: Vector3,
    /// Ray parameter of the point (may be negative for `Root::Near`)
    pub t: f64,
    /// Root the point was taken from
    pub root: Root,
}

impl Ellipsoid {
    /// Intersect a ray with this ellipsoid.
    ///
    /// Returns `Ok(None)` when the discriminant is not strictly positive,
    /// which includes the tangent case.
    pub fn intersect(&self, ray: &Ray) -> SolveResult<Option<Intersection>> {
        if !ray.is_finite() {
            return Err(SolveError::NonFiniteInput);
        }
        select_root(QuadraticCoefficients::for_ray(self, ray), ray)
    }

    /// Intersect a ray given by integer components.
    ///
    /// The coefficient sums are exact; only the final point is evaluated in
    /// f64 from the converted components.
    pub fn intersect_integer(
        &self,
        direction: IntVector3,
        origin: IntVector3,
    ) -> SolveResult<Option<Intersection>> {
        let q = QuadraticCoefficients::for_integer_ray(self, direction, origin);
        select_root(q, &Ray::new(origin.as_dvec3(), direction.as_dvec3()))
    }
}

fn select_root(q: QuadraticCoefficients, ray: &Ray) -> SolveResult<Option<Intersection>> {
    if q.a == 0.0 {
        return Err(SolveError::DegenerateDirection);
    }
    if !q.is_finite() {
        return Err(SolveError::Overflow);
    }

    let disc = q.discriminant();
    log::debug!(
        "quadratic a={} b={} c={} disc={}",
        q.a,
        q.b,
        q.c,
        disc
    );

    if !disc.is_finite() {
        return Err(SolveError::Overflow);
    }
    // Tangent rays (disc == 0) count as a miss
    if disc <= 0.0 {
        return Ok(None);
    }

    let far = q.far_root(disc);
    let (t, root) = if Interval::FORWARD.contains(far) {
        (far, Root::Far)
    } else {
        (q.near_root(disc), Root::Near)
    };
    log::debug!("selected {:?} root t={}", root, t);

    let point = ray.at(t);
    if !t.is_finite() || !point.is_finite() {
        return Err(SolveError::Overflow);
    }

    Ok(Some(Intersection { point, t, root }))
}

/// Intersect the ray `origin + t * direction` with the reference ellipsoid.
pub fn solve(direction: Vector3, origin: Vector3) -> SolveResult<Option<Intersection>> {
    Ellipsoid::REFERENCE.intersect(&Ray::new(origin, direction))
}
