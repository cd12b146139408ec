//! Driver Rating - command-line binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rate-premium -- profile.json
//! RATING_OUTPUT_FORMAT=json cargo run --bin rate-premium -- profile.json
//! ```

use anyhow::Context;
use clap::Parser;
use interface_cli::{run, Cli, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("Invalid RATING_* configuration")?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();
    run(&cli, &config, &mut stdout).context("Failed to rate driver profile")?;

    Ok(())
}

/// Initializes the tracing subscriber; logs go to stderr so stdout stays clean
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
