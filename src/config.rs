use clap::Args;

use crate::format::OutputFormat;

/// Options shared by both converters
#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose logging (DEBUG level)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
