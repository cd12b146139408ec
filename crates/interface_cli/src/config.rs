//! CLI configuration

use serde::Deserialize;

use crate::error::CliError;

/// Output format for a rated premium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-per-item breakdown
    Text,
    /// Pretty-printed JSON
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Log level or tracing filter directive
    pub log_level: String,
    /// Output format used when no `--format` flag is given
    pub output_format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `RATING_`-prefixed environment variables
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, CliError> {
        let defaults = Self::default();
        let config = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("output_format", "text")?
            .add_source(config::Environment::with_prefix("RATING"))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    // Environment is process-wide, so defaults and overrides share one test
    #[test]
    fn test_from_env() {
        std::env::remove_var("RATING_LOG_LEVEL");
        std::env::remove_var("RATING_OUTPUT_FORMAT");

        let config = CliConfig::from_env().unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output_format, OutputFormat::Text);

        std::env::set_var("RATING_LOG_LEVEL", "debug");
        std::env::set_var("RATING_OUTPUT_FORMAT", "json");
        let overridden = CliConfig::from_env();

        std::env::set_var("RATING_OUTPUT_FORMAT", "yaml");
        let invalid = CliConfig::from_env();

        std::env::remove_var("RATING_LOG_LEVEL");
        std::env::remove_var("RATING_OUTPUT_FORMAT");

        let overridden = overridden.unwrap();
        assert_eq!(overridden.log_level, "debug");
        assert_eq!(overridden.output_format, OutputFormat::Json);
        assert!(matches!(invalid, Err(CliError::Config(_))));
    }
}
