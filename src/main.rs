//! # Main — CLI Entry Point
//!
//! Loads the run configuration (key=value file, with CLI flag overrides),
//! initializes structured logging on stderr, and hands the run to
//! [`SearchDriver`] with the console sink. Search output proper goes to
//! stdout through the sink; telemetry and warnings go to the `tracing`
//! subscriber so the two streams never mix.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use primesweep::config::Config;
use primesweep::driver::SearchDriver;
use primesweep::report::ConsoleSink;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "primesweep",
    about = "Search for primes with one of four multi-threaded strategies"
)]
struct Cli {
    /// Path to the key=value config file (missing file falls back to defaults)
    #[arg(default_value = "config.txt")]
    config: PathBuf,

    /// Worker thread count (overrides the config file; 0 is treated as 1)
    #[arg(long)]
    threads: Option<usize>,

    /// Inclusive upper search bound (overrides the config file)
    #[arg(long)]
    max: Option<u64>,

    /// Strategy variant, 1 through 4 (overrides the config file)
    #[arg(long)]
    variant: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(&cli.config);
    if let Some(threads) = cli.threads {
        config.threads = threads;
    }
    if let Some(max) = cli.max {
        config.max_n = max;
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }

    info!(
        threads = config.threads,
        max = config.max_n,
        variant = config.variant,
        "primesweep starting"
    );

    let sink = ConsoleSink;
    SearchDriver::new(config, &sink).run();
    Ok(())
}
