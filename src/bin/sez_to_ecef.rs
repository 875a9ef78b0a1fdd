use std::io;

use clap::Parser;
use sez_ecef::cli::{SezArgs, init_logging, run_sez};

// e.g. sez_to_ecef 40.496 -80.246 0.37 0 1 0.3
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = SezArgs::parse();
    init_logging(args.config.verbose);
    run_sez(&args.config, &args.values, &mut io::stdout().lock())?;
    Ok(())
}
