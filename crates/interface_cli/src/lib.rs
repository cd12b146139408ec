//! Driver Rating CLI
//!
//! Command-line front end for the rating engine. Reads a driver profile as
//! JSON from a file or stdin, rates it with the standard engine and prints
//! the premium breakdown as text or JSON.
//!
//! # Usage
//!
//! ```bash
//! rate-premium profile.json
//! cat profile.json | rate-premium --format json
//! rate-premium --show-rates
//! ```
//!
//! # Environment Variables
//!
//! * `RATING_LOG_LEVEL` - Log level or filter directive (default: warn)
//! * `RATING_OUTPUT_FORMAT` - `text` or `json` (default: text)

pub mod config;
pub mod error;

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use domain_rating::{DriverProfile, Premium, RateTable, RatingEngine};
use tracing::{debug, info};

pub use config::{CliConfig, OutputFormat};
pub use error::CliError;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "rate-premium", version, about = "Rate a driver profile and explain the premium")]
pub struct Cli {
    /// Driver profile JSON file; reads stdin when omitted or "-"
    pub profile: Option<PathBuf>,

    /// Output format (overrides RATING_OUTPUT_FORMAT)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the rate table and exit
    #[arg(long)]
    pub show_rates: bool,
}

/// Parses a driver profile from JSON
pub fn read_profile<R: Read>(reader: R) -> Result<DriverProfile, CliError> {
    serde_json::from_reader(reader).map_err(CliError::InvalidProfile)
}

/// Loads a driver profile from a file, or stdin for `None` / `-`
pub fn load_profile(path: Option<&Path>) -> Result<DriverProfile, CliError> {
    load_profile_or(path, || io::stdin().lock())
}

/// Loads a driver profile from a file, or from `fallback` for `None` / `-`
pub fn load_profile_or<R, F>(path: Option<&Path>, fallback: F) -> Result<DriverProfile, CliError>
where
    R: Read,
    F: FnOnce() -> R,
{
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| CliError::ReadProfile {
                path: path.to_path_buf(),
                source,
            })?;
            read_profile(BufReader::new(file))
        }
        _ => read_profile(fallback()),
    }
}

/// Renders a premium in the requested format
pub fn render_premium(premium: &Premium, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(premium.explanation()),
        OutputFormat::Json => serde_json::to_string_pretty(premium)
            .map(|json| json + "\n")
            .map_err(CliError::Render),
    }
}

/// Renders the rate table as `key = value` lines
pub fn render_rates(rates: &RateTable) -> String {
    rates
        .entries()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}

/// Runs the command against the given output
pub fn run<W: Write>(cli: &Cli, config: &CliConfig, out: &mut W) -> Result<(), CliError> {
    let engine = RatingEngine::new();

    if cli.show_rates {
        out.write_all(render_rates(engine.rates()).as_bytes())?;
        return Ok(());
    }

    let profile = load_profile(cli.profile.as_deref())?;
    debug!(driver = profile.name(), age = profile.age(), "profile loaded");

    let premium = engine.calculate_premium(&profile);
    info!(driver = profile.name(), total = %premium.total(), "premium rated");

    let format = cli.format.unwrap_or(config.output_format);
    out.write_all(render_premium(&premium, format)?.as_bytes())?;
    Ok(())
}
