//! Demo configuration

use clap::Parser;

/// Interactive bag demo configuration
#[derive(Debug, Parser)]
#[command(name = "arraybag-demo", about = "Interactive ArrayBag demo", long_about = None)]
pub struct DemoConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Seed for the item picked by `grab`; random when omitted
    #[arg(short, long, env = "ARRAYBAG_SEED")]
    pub seed: Option<u64>,

    /// Item counted in bag 1 for the final report
    #[arg(long, default_value = "1")]
    pub probe1: String,

    /// Item counted in bag 2 for the final report
    #[arg(long, default_value = "5")]
    pub probe2: String,
}

impl DemoConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
