use glam::{DMat3, DVec3};
use tracing::{debug, warn};

use crate::{
    Ecef, EcefOffset, Ellipsoid, GeodeticPosition, LookAngle, Sez, geodetic::geodetic_to_ecef,
    helpers::modulus,
};

/// Proper rotation between a local frame and ECEF-aligned axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation(DMat3);

impl Rotation {
    /// Rotation about the local east axis by the observer latitude.
    pub fn east_axis(lat_rad: f64) -> Rotation {
        let (s, c) = lat_rad.sin_cos();
        Rotation(DMat3::from_cols(
            DVec3::new(s, 0., -c),
            DVec3::Y,
            DVec3::new(c, 0., s),
        ))
    }

    /// Rotation about the polar axis by the observer longitude.
    pub fn polar_axis(lon_rad: f64) -> Rotation {
        let (s, c) = lon_rad.sin_cos();
        Rotation(DMat3::from_cols(
            DVec3::new(c, s, 0.),
            DVec3::new(-s, c, 0.),
            DVec3::Z,
        ))
    }

    /// SEZ -> ECEF axes. The east-axis turn is applied to the raw SEZ vector first.
    pub fn sez_to_ecef(lat_rad: f64, lon_rad: f64) -> Rotation {
        Self::east_axis(lat_rad).then(Self::polar_axis(lon_rad))
    }

    /// `self` followed by `next`.
    pub fn then(self, next: Rotation) -> Rotation {
        Rotation(next.0 * self.0)
    }

    pub fn transpose(self) -> Rotation {
        Rotation(self.0.transpose())
    }

    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.0 * v
    }

    pub fn matrix(&self) -> DMat3 {
        self.0
    }
}

/// Rotate a SEZ offset onto ECEF axes without translating it.
pub fn sez_to_ecef_offset(observer: &GeodeticPosition, sez: &Sez) -> EcefOffset {
    let rot = Rotation::sez_to_ecef(observer.lat_rad(), observer.lon_rad());
    let v = rot.apply(DVec3::new(sez.south_km, sez.east_km, sez.zenith_km));
    debug!(x = v.x, y = v.y, z = v.z, "sez offset on ecef axes");
    EcefOffset {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Absolute ECEF position of a point given as a SEZ offset from `observer`.
pub fn sez_to_ecef(ellipsoid: &Ellipsoid, observer: &GeodeticPosition, sez: &Sez) -> Ecef {
    geodetic_to_ecef(ellipsoid, observer) + sez_to_ecef_offset(observer, sez)
}

/// SEZ offset of `target` as seen from `observer`.
pub fn ecef_to_sez(ellipsoid: &Ellipsoid, observer: &GeodeticPosition, target: &Ecef) -> Sez {
    let d = *target - geodetic_to_ecef(ellipsoid, observer);
    let rot = Rotation::sez_to_ecef(observer.lat_rad(), observer.lon_rad()).transpose();
    let v = rot.apply(DVec3::new(d.x, d.y, d.z));
    Sez {
        south_km: v.x,
        east_km: v.y,
        zenith_km: v.z,
    }
}

/// Azimuth is clockwise from north.
pub fn look_angle(sez: &Sez) -> LookAngle {
    let range = sez.range_km();
    if range == 0. {
        warn!("zero-length look vector, direction undefined");
        return LookAngle {
            azimuth_deg: 0.,
            elevation_deg: 0.,
            range_km: 0.,
        };
    }
    let elevation = (sez.zenith_km / range).asin().to_degrees();
    let azimuth = modulus(sez.east_km.atan2(-sez.south_km).to_degrees(), 360.);
    LookAngle {
        azimuth_deg: azimuth,
        elevation_deg: elevation,
        range_km: range,
    }
}

pub fn look_angle_to(ellipsoid: &Ellipsoid, observer: &GeodeticPosition, target: &Ecef) -> LookAngle {
    look_angle(&ecef_to_sez(ellipsoid, observer, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format::round_to, helpers::assert_almost_eq};

    fn observer() -> GeodeticPosition {
        GeodeticPosition::new(40.496, -80.246, 0.37).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let sez = Sez::new(0., 1., 0.3).unwrap();
        let ecef = sez_to_ecef(&Ellipsoid::REFERENCE, &observer(), &sez);
        assert_eq!(round_to(ecef.x, 3), 823.957);
        assert_eq!(round_to(ecef.y, 3), -4787.242);
        assert_eq!(round_to(ecef.z, 3), 4120.457);
        assert_almost_eq(ecef.x, 823.9574278775165, 1e-9);
        assert_almost_eq(ecef.y, -4787.242302467653, 1e-9);
        assert_almost_eq(ecef.z, 4120.456750462099, 1e-9);
    }

    #[test]
    fn test_zero_offset_is_observer() {
        let ell = Ellipsoid::REFERENCE;
        for obs in [observer(), GeodeticPosition::new(-90., 12., 3.).unwrap()] {
            let ecef = sez_to_ecef(&ell, &obs, &Sez::new(0., 0., 0.).unwrap());
            assert_eq!(ecef, geodetic_to_ecef(&ell, &obs));
        }
    }

    #[test]
    fn test_local_axes_at_origin() {
        let origin = GeodeticPosition::new(0., 0., 0.).unwrap();
        let up = sez_to_ecef_offset(&origin, &Sez::new(0., 0., 1.).unwrap());
        assert_almost_eq(up.x, 1., 1e-12);
        assert_almost_eq(up.z, 0., 1e-12);
        let south = sez_to_ecef_offset(&origin, &Sez::new(1., 0., 0.).unwrap());
        assert_almost_eq(south.z, -1., 1e-12);
        let east = sez_to_ecef_offset(&origin, &Sez::new(0., 1., 0.).unwrap());
        assert_almost_eq(east.y, 1., 1e-12);
    }

    #[test]
    fn test_zenith_at_north_pole_is_polar_axis() {
        let pole = GeodeticPosition::new(90., 33., 0.).unwrap();
        let up = sez_to_ecef_offset(&pole, &Sez::new(0., 0., 2.).unwrap());
        assert_almost_eq(up.x, 0., 1e-12);
        assert_almost_eq(up.y, 0., 1e-12);
        assert_almost_eq(up.z, 2., 1e-12);
    }

    #[test]
    fn test_rotation_order_matters() {
        let (lat, lon) = (observer().lat_rad(), observer().lon_rad());
        let correct = Rotation::sez_to_ecef(lat, lon);
        let reversed = Rotation::polar_axis(lon).then(Rotation::east_axis(lat));
        let v = DVec3::new(0., 1., 0.3);
        assert!((correct.apply(v) - reversed.apply(v)).length() > 1e-3);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let rot = Rotation::sez_to_ecef(observer().lat_rad(), observer().lon_rad());
        let m = rot.matrix();
        assert_almost_eq(m.determinant(), 1., 1e-12);
        assert!((m * rot.transpose().matrix()).abs_diff_eq(DMat3::IDENTITY, 1e-12));
    }

    #[test]
    fn test_ecef_to_sez_inverts() {
        let ell = Ellipsoid::REFERENCE;
        let sez = Sez::new(-12.5, 301.2, 408.).unwrap();
        let back = ecef_to_sez(&ell, &observer(), &sez_to_ecef(&ell, &observer(), &sez));
        assert_almost_eq(back.south_km, sez.south_km, 1e-8);
        assert_almost_eq(back.east_km, sez.east_km, 1e-8);
        assert_almost_eq(back.zenith_km, sez.zenith_km, 1e-8);
    }

    #[test]
    fn test_look_angles() {
        let east = look_angle(&Sez::new(0., 5., 0.).unwrap());
        assert_almost_eq(east.azimuth_deg, 90., 1e-12);
        assert_almost_eq(east.elevation_deg, 0., 1e-12);
        assert_almost_eq(east.range_km, 5., 1e-12);
        let north = look_angle(&Sez::new(-1., 0., 1.).unwrap());
        assert_almost_eq(north.azimuth_deg, 0., 1e-12);
        assert_almost_eq(north.elevation_deg, 45., 1e-12);
        let west = look_angle(&Sez::new(0., -1., 0.).unwrap());
        assert_almost_eq(west.azimuth_deg, 270., 1e-12);
        assert_almost_eq(look_angle(&Sez::new(2., 0., 0.).unwrap()).azimuth_deg, 180., 1e-12);
        assert_eq!(look_angle(&Sez::new(0., 0., 0.).unwrap()).range_km, 0.);
    }

    #[test]
    fn test_look_angle_to_overhead_target() {
        let ell = Ellipsoid::REFERENCE;
        let target = sez_to_ecef(&ell, &observer(), &Sez::new(0., 0., 420.).unwrap());
        let look = look_angle_to(&ell, &observer(), &target);
        assert_almost_eq(look.elevation_deg, 90., 1e-6);
        assert_almost_eq(look.range_km, 420., 1e-8);
    }
}
