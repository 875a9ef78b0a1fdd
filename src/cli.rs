// Entry-point glue for the llh_to_ecef and sez_to_ecef binaries.
//
// Argument-count mistakes print a usage line and exit cleanly, whatever the
// tokens are. Anything else that goes wrong is returned to main and ends the
// process.

use std::io::Write;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    Ellipsoid, GeodeticPosition, Sez,
    config::Config,
    error::CoordError,
    format::{Layout, render},
    geodetic::geodetic_to_ecef,
    topocentric::sez_to_ecef,
};

pub const LLH_USAGE: &str = "Usage: llh_to_ecef lat_deg lon_deg hae_km";
pub const SEZ_USAGE: &str = "Usage: sez_to_ecef o_lat_deg o_lon_deg o_hae_km s_km e_km z_km";

/// Convert geodetic lat/long/height to ECEF
#[derive(Parser, Debug)]
#[command(name = "llh_to_ecef", version, about, long_about = None)]
pub struct LlhArgs {
    /// lat_deg lon_deg hae_km
    #[arg(allow_negative_numbers = true, value_name = "VALUE")]
    pub values: Vec<String>,

    #[command(flatten)]
    pub config: Config,
}

/// Convert a SEZ offset from an observer to ECEF
#[derive(Parser, Debug)]
#[command(name = "sez_to_ecef", version, about, long_about = None)]
pub struct SezArgs {
    /// o_lat_deg o_lon_deg o_hae_km s_km e_km z_km
    #[arg(allow_negative_numbers = true, value_name = "VALUE")]
    pub values: Vec<String>,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Usage,
    Converted,
}

// Only called once the count is known to be right
fn parse_values(values: &[String]) -> Result<Vec<f64>, CoordError> {
    values
        .iter()
        .map(|v| {
            v.trim().parse::<f64>().map_err(|source| CoordError::Parse {
                value: v.clone(),
                source,
            })
        })
        .collect()
}

pub fn run_llh<W: Write>(config: &Config, values: &[String], out: &mut W) -> Result<Outcome, CoordError> {
    if values.len() != 3 {
        writeln!(out, "{LLH_USAGE}")?;
        return Ok(Outcome::Usage);
    }
    let v = parse_values(values)?;
    let pos = GeodeticPosition::new(v[0], v[1], v[2])?;
    debug!(?pos, "converting geodetic position");
    let ecef = geodetic_to_ecef(&Ellipsoid::REFERENCE, &pos);
    writeln!(out, "{}", render(&ecef, Layout::Lines, config.format)?)?;
    info!(x = ecef.x, y = ecef.y, z = ecef.z, "geodetic -> ecef done");
    Ok(Outcome::Converted)
}

pub fn run_sez<W: Write>(config: &Config, values: &[String], out: &mut W) -> Result<Outcome, CoordError> {
    if values.len() != 6 {
        writeln!(out, "{SEZ_USAGE}")?;
        return Ok(Outcome::Usage);
    }
    let v = parse_values(values)?;
    let observer = GeodeticPosition::new(v[0], v[1], v[2])?;
    let sez = Sez::new(v[3], v[4], v[5])?;
    debug!(?observer, ?sez, "converting sez offset");
    let ecef = sez_to_ecef(&Ellipsoid::REFERENCE, &observer, &sez);
    writeln!(out, "{}", render(&ecef, Layout::Column, config.format)?)?;
    info!(x = ecef.x, y = ecef.y, z = ecef.z, "sez -> ecef done");
    Ok(Outcome::Converted)
}

/// stderr subscriber; `RUST_LOG` wins over `--verbose` when set.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
