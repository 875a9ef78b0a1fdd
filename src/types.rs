use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{CoordError, finite};

/// Observer or target location relative to the reference ellipsoid.
/// Lat/long in decimal degrees, height above ellipsoid in km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub height_km: f64,
}
impl GeodeticPosition {
    /// Finite values are accepted as-is, without range checks or wrapping.
    pub fn new(lat_deg: f64, lon_deg: f64, height_km: f64) -> Result<GeodeticPosition, CoordError> {
        Ok(GeodeticPosition {
            lat_deg: finite("latitude", lat_deg)?,
            lon_deg: finite("longitude", lon_deg)?,
            height_km: finite("height", height_km)?,
        })
    }
    ///Point is Lat/long/height
    pub fn from_array(point: [f64; 3]) -> Result<GeodeticPosition, CoordError> {
        Self::new(point[0], point[1], point[2])
    }
    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }
    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }
}

/// Absolute position in the Earth-centred Earth-fixed frame, km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Ecef {
    pub fn new(x: f64, y: f64, z: f64) -> Ecef {
        Ecef { x, y, z }
    }
    pub fn norm(&self) -> f64 {
        (self.x.powf(2.) + self.y.powf(2.) + self.z.powf(2.)).sqrt()
    }
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Displacement along the ECEF axes. Only meaningful once added to an [`Ecef`] position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EcefOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl EcefOffset {
    pub fn norm(&self) -> f64 {
        (self.x.powf(2.) + self.y.powf(2.) + self.z.powf(2.)).sqrt()
    }
}

impl Add<EcefOffset> for Ecef {
    type Output = Ecef;
    fn add(self, rhs: EcefOffset) -> Ecef {
        Ecef {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Ecef {
    type Output = EcefOffset;
    fn sub(self, rhs: Ecef) -> EcefOffset {
        EcefOffset {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

/// South-East-Zenith offset from an observer, km.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sez {
    pub south_km: f64,
    pub east_km: f64,
    pub zenith_km: f64,
}
impl Sez {
    pub fn new(south_km: f64, east_km: f64, zenith_km: f64) -> Result<Sez, CoordError> {
        Ok(Sez {
            south_km: finite("south", south_km)?,
            east_km: finite("east", east_km)?,
            zenith_km: finite("zenith", zenith_km)?,
        })
    }
    pub fn range_km(&self) -> f64 {
        (self.south_km.powf(2.) + self.east_km.powf(2.) + self.zenith_km.powf(2.)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LookAngle {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    pub range_km: f64,
}
