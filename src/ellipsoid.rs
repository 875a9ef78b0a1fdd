use serde::{Deserialize, Serialize};

use crate::error::CoordError;

/// Oblate spheroid used for every conversion. Radius in km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    pub equatorial_radius_km: f64,
    pub eccentricity: f64,
}

impl Ellipsoid {
    pub const REFERENCE: Ellipsoid = Ellipsoid {
        equatorial_radius_km: 6378.1363,
        eccentricity: 0.081819221456,
    };

    pub fn new(equatorial_radius_km: f64, eccentricity: f64) -> Result<Ellipsoid, CoordError> {
        let radius_ok = equatorial_radius_km.is_finite() && equatorial_radius_km > 0.;
        let ecc_ok = eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity);
        if !radius_ok || !ecc_ok {
            return Err(CoordError::InvalidEllipsoid {
                radius_km: equatorial_radius_km,
                eccentricity,
            });
        }
        Ok(Ellipsoid {
            equatorial_radius_km,
            eccentricity,
        })
    }

    pub fn e2(&self) -> f64 {
        self.eccentricity.powf(2.)
    }

    // 1 - e²sin²(lat) stays positive for any real latitude while e < 1
    fn denominator(&self, lat_rad: f64) -> f64 {
        (1. - self.e2() * lat_rad.sin().powf(2.)).sqrt()
    }

    /// Radius of curvature in the prime vertical.
    pub fn c_e(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km / self.denominator(lat_rad)
    }

    pub fn s_e(&self, lat_rad: f64) -> f64 {
        self.equatorial_radius_km * (1. - self.e2()) / self.denominator(lat_rad)
    }

    pub fn polar_radius_km(&self) -> f64 {
        self.equatorial_radius_km * (1. - self.e2()).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Ellipsoid::REFERENCE
    }
}
