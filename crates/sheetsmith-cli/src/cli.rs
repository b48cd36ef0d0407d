//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sheetsmith - extract tables from PDF files into spreadsheets.
#[derive(Debug, Parser)]
#[command(name = "sheetsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (output path only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a PDF into an XLSX workbook
    Convert(ConvertArgs),

    /// Print the response schema sent to the model
    Schema,
}

/// Deployment profile argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProfileArg {
    /// 4 MiB limit, 9 second deadline
    Constrained,
    /// 10 MiB limit, no deadline
    Development,
}

impl From<ProfileArg> for sheetsmith_extractor::Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Constrained => sheetsmith_extractor::Profile::Constrained,
            ProfileArg::Development => sheetsmith_extractor::Profile::Development,
        }
    }
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// PDF file to convert
    pub input: PathBuf,

    /// Output path (default: next to the input, with an .xlsx extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Limits profile
    #[arg(short, long, value_enum, default_value = "development")]
    pub profile: ProfileArg,

    /// AI deadline in seconds (overrides the profile)
    #[arg(short, long, conflicts_with = "no_timeout")]
    pub timeout: Option<u64>,

    /// Wait for the AI indefinitely
    #[arg(long)]
    pub no_timeout: bool,

    /// Gemini model
    #[arg(short, long, env = "SHEETSMITH_MODEL")]
    pub model: Option<String>,

    /// Gemini API endpoint
    #[arg(long, env = "SHEETSMITH_ENDPOINT")]
    pub endpoint: Option<String>,
}
