//! Geodetic, topocentric South-East-Zenith and Earth-centred Earth-fixed
//! coordinate conversions over an oblate reference ellipsoid.
//!
//! All distances are kilometres and all angles at the API boundary are degrees.
pub use ellipsoid::Ellipsoid;
pub use error::CoordError;
pub use geodetic::{ecef_to_geodetic, geodetic_to_ecef, llh_to_ecef};
pub use topocentric::{Rotation, ecef_to_sez, look_angle, look_angle_to, sez_to_ecef, sez_to_ecef_offset};
pub use types::{Ecef, EcefOffset, GeodeticPosition, LookAngle, Sez};
pub mod cli;
pub mod config;
mod ellipsoid;
mod error;
pub mod format;
mod geodetic;
mod helpers;
mod topocentric;
mod types;
