//! Runtime configuration for the decoder CLI.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use music_data::ResponseKind;
use tracing::Level;

/// How the decoded response is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full decoded value, arrays included
    Json,
    /// Metadata and dimensions only
    Summary,
}

/// Validated settings for one decoder run.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub input: PathBuf,
    pub kind: ResponseKind,
    pub format: OutputFormat,
    /// Exit with an error when the service reported a failure
    pub strict: bool,
    pub log_level: Level,
}

impl DecodeConfig {
    pub fn new(input: PathBuf, kind: &str, format: OutputFormat, strict: bool, log_level: &str) -> Result<Self> {
        let kind = kind
            .parse::<ResponseKind>()
            .with_context(|| format!("Invalid response kind '{}'", kind))?;

        let config = Self {
            input,
            kind,
            format,
            strict,
            log_level: parse_level(log_level),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            bail!("Input file not found: {}", self.input.display());
        }
        Ok(())
    }
}

/// Map a level name to a tracing level, defaulting to INFO.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
