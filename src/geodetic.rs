use tracing::debug;

use crate::{Ecef, Ellipsoid, GeodeticPosition, error::CoordError, helpers::modulus};

const MAX_ITERATIONS: usize = 50;
const LAT_TOLERANCE_RAD: f64 = 1e-12;

/// Project a lat/long/height point onto ECEF axes.
pub fn geodetic_to_ecef(ellipsoid: &Ellipsoid, pos: &GeodeticPosition) -> Ecef {
    let lat = pos.lat_rad();
    let lon = pos.lon_rad();
    let c_e = ellipsoid.c_e(lat);
    let s_e = ellipsoid.s_e(lat);
    debug!(c_e, s_e, "ellipsoid curvature terms");
    let x = (c_e + pos.height_km) * lat.cos() * lon.cos();
    let y = (c_e + pos.height_km) * lat.cos() * lon.sin();
    let z = (s_e + pos.height_km) * lat.sin();
    Ecef { x, y, z }
}

/// Validating shorthand over [`Ellipsoid::REFERENCE`].
pub fn llh_to_ecef(lat_deg: f64, lon_deg: f64, height_km: f64) -> Result<Ecef, CoordError> {
    let pos = GeodeticPosition::new(lat_deg, lon_deg, height_km)?;
    Ok(geodetic_to_ecef(&Ellipsoid::REFERENCE, &pos))
}

/// Inverse of [`geodetic_to_ecef`]. Longitude comes back in [-180, 180).
pub fn ecef_to_geodetic(ellipsoid: &Ellipsoid, ecef: &Ecef) -> GeodeticPosition {
    let e2 = ellipsoid.e2();
    let r = (ecef.x.powf(2.) + ecef.y.powf(2.)).sqrt();
    let mut guess = ecef.z.atan2(r * (1. - e2));
    for _ in 0..MAX_ITERATIONS {
        let last_guess = guess;
        let c_e = ellipsoid.c_e(last_guess);
        guess = (ecef.z + c_e * e2 * last_guess.sin()).atan2(r);
        if (guess - last_guess).abs() < LAT_TOLERANCE_RAD {
            break;
        }
    }
    // Valid at the poles too, unlike r / cos(lat) - N
    let height_km = r * guess.cos() + ecef.z * guess.sin()
        - ellipsoid.equatorial_radius_km * (1. - e2 * guess.sin().powf(2.)).sqrt();
    let lon_deg = modulus(ecef.y.atan2(ecef.x).to_degrees() + 180., 360.) - 180.;
    GeodeticPosition {
        lat_deg: guess.to_degrees(),
        lon_deg,
        height_km,
    }
}
