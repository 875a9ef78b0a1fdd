use clap::ValueEnum;

use crate::{Ecef, error::CoordError};

pub const GEODETIC_PLACES: i32 = 6;
pub const SEZ_PLACES: i32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Rounds on the exact decimal value of `value`. The sign of zero is kept.
pub fn round_to(value: f64, places: i32) -> f64 {
    let digits = places.max(0) as usize;
    format!("{value:.digits$}").parse().unwrap_or(value)
}

pub fn round_ecef(ecef: &Ecef, places: i32) -> Ecef {
    Ecef::new(
        round_to(ecef.x, places),
        round_to(ecef.y, places),
        round_to(ecef.z, places),
    )
}

// Shortest representation, always with a fractional part
fn shortest(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

/// One rounded component per line.
pub fn geodetic_lines(ecef: &Ecef) -> String {
    round_ecef(ecef, GEODETIC_PLACES)
        .to_array()
        .iter()
        .map(|v| shortest(*v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Matrix-style column vector, right-aligned.
pub fn column_vector(ecef: &Ecef) -> String {
    let cells: Vec<String> = round_ecef(ecef, SEZ_PLACES)
        .to_array()
        .iter()
        .map(|v| format!("{v:.prec$}", prec = SEZ_PLACES as usize))
        .collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    let rows: Vec<String> = cells.iter().map(|c| format!("[{c:>width$}]")).collect();
    format!("[{}]", rows.join("\n "))
}

/// Text layout used by each entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Lines,
    Column,
}
impl Layout {
    pub fn places(&self) -> i32 {
        match self {
            Layout::Lines => GEODETIC_PLACES,
            Layout::Column => SEZ_PLACES,
        }
    }
}

pub fn render(ecef: &Ecef, layout: Layout, format: OutputFormat) -> Result<String, CoordError> {
    match (format, layout) {
        (OutputFormat::Json, _) => Ok(serde_json::to_string(&round_ecef(ecef, layout.places()))?),
        (OutputFormat::Text, Layout::Lines) => Ok(geodetic_lines(ecef)),
        (OutputFormat::Text, Layout::Column) => Ok(column_vector(ecef)),
    }
}
