use std::io;

use clap::Parser;
use sez_ecef::cli::{LlhArgs, init_logging, run_llh};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = LlhArgs::parse();
    init_logging(args.config.verbose);
    run_llh(&args.config, &args.values, &mut io::stdout().lock())?;
    Ok(())
}
