//! Sheetsmith server binary
//!
//! Starts the HTTP server for PDF-to-spreadsheet conversion.

use clap::Parser;
use sheetsmith_server::{config::ServerConfig, init_tracing, start_server, ServerError};
use std::path::PathBuf;
use std::process;

/// Sheetsmith server - convert uploaded PDF tables into XLSX workbooks.
///
/// The Gemini API key is read from GEMINI_API_KEY.
#[derive(Debug, Parser)]
#[command(name = "sheetsmith-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "SHEETSMITH_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args = Args::parse();
    init_tracing();

    let mut config = match args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => {
            tracing::warn!("No config file specified, using defaults");
            ServerConfig::default()
        }
    };
    config.apply_env_overrides()?;

    start_server(config).await
}
