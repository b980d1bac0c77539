//! Array Bag Demo
//!
//! Reads two bags from standard input, exercises each one and prints a report
//! comparing them.
//!
//! Use `--seed` to make the item picked by `grab` reproducible.

use std::{io, process};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{config::DemoConfig, session::Session};

mod config;
mod session;

/// Array Bag Demo entry point
pub fn main() {
    // Load configuration from .env and CLI arguments
    let config = DemoConfig::load().unwrap_or_else(|e| e.exit());

    // Logs go to stderr so they stay out of the session transcript
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let rng = match config.seed {
        Some(seed) => {
            info!(seed, "using seeded grab");

            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let session = Session::new(
        io::stdin().lock(),
        io::stdout().lock(),
        rng,
        config.probe1,
        config.probe2,
    );

    if let Err(run_error) = session.run() {
        error!("demo failed: {run_error}");

        process::exit(1);
    }
}
