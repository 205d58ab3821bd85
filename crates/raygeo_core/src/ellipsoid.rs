//! Reference ellipsoid approximating the planet surface.

use serde::{Deserialize, Serialize};

use crate::error::EllipsoidError;

/// Equatorial radius of the reference ellipsoid, kilometers.
pub const R_E_KM: f64 = 6378.1363;

/// Eccentricity of the reference ellipsoid.
pub const E_E: f64 = 0.081819221456;

/// Reference ellipsoid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Equatorial radius (km)
    pub equatorial_radius_km: f64,
    /// Eccentricity (dimensionless)
    pub eccentricity: f64,
}

impl Ellipsoid {
    /// The fixed reference ellipsoid (`R_E_KM`, `E_E`).
    pub const REFERENCE: Ellipsoid = Ellipsoid {
        equatorial_radius_km: R_E_KM,
        eccentricity: E_E,
    };

    /// Create an ellipsoid, validating both parameters.
    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Self, EllipsoidError> {
        if !equatorial_radius_km.is_finite() || equatorial_radius_km <= 0.0 {
            return Err(EllipsoidError::InvalidRadius(equatorial_radius_km));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(EllipsoidError::InvalidEccentricity(eccentricity));
        }
        Ok(Self {
            equatorial_radius_km,
            eccentricity,
        })
    }

    /// `k = 1 - e^2`.
    ///
    /// Applied uniformly to all three squared components when forming the
    /// quadratic, not only to the polar axis.
    #[inline]
    pub fn flattening_factor(&self) -> f64 {
        1.0 - (self.eccentricity * self.eccentricity)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::REFERENCE
    }
}
