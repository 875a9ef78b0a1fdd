#[derive(thiserror::Error, Debug)]
pub enum CoordError {
    /// An input component was NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    /// A positional argument that is not a number
    #[error("could not parse {value:?} as a number: {source}")]
    Parse {
        value: String,
        source: std::num::ParseFloatError,
    },
    /// Ellipsoid parameters outside the physical range
    #[error("invalid ellipsoid (radius {radius_km} km, eccentricity {eccentricity})")]
    InvalidEllipsoid { radius_km: f64, eccentricity: f64 },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<f64, CoordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordError::NonFinite { field, value })
    }
}
