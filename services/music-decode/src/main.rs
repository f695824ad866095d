//! MUSIC response decoder.
//!
//! Reads a saved service response body from disk, decodes it as the given
//! message kind and writes the result as JSON to stdout. Logs go to stderr.

mod config;
mod report;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use config::{DecodeConfig, OutputFormat};
use report::{load_input, Summary};

#[derive(Parser, Debug)]
#[command(name = "music-decode")]
#[command(about = "Decode a saved MUSIC service response")]
struct Args {
    /// Response body as returned by the service
    input: PathBuf,

    /// Message kind of the response body
    #[arg(short, long, env = "MUSIC_RESPONSE_KIND")]
    kind: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Exit non-zero when the service reported an error
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = DecodeConfig::new(args.input, &args.kind, args.format, args.strict, &args.log_level)?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(input = %config.input.display(), kind = %config.kind, "Decoding response");

    let body = load_input(&config.input)?;
    let response = music_data::decode(body, config.kind)?;

    let metadata = response.metadata();
    if !metadata.is_success() {
        warn!(
            error_code = metadata.error_code,
            error_message = %metadata.error_message,
            "Service reported an error"
        );
    }

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut stdout, &response)?,
        OutputFormat::Summary => serde_json::to_writer_pretty(&mut stdout, &Summary::new(&response))?,
    }
    writeln!(stdout)?;

    if config.strict && !response.is_success() {
        bail!(
            "Service error {}: {}",
            response.metadata().error_code,
            response.metadata().error_message
        );
    }

    Ok(())
}
