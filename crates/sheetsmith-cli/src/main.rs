//! Sheetsmith CLI - convert PDF tables into spreadsheets from the command line.

use clap::Parser;
use sheetsmith_cli::commands;
use sheetsmith_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &formatter).await {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, formatter: &Formatter) -> sheetsmith_cli::Result<()> {
    match cli.command {
        Command::Convert(args) => commands::execute_convert(args, formatter).await,
        Command::Schema => commands::execute_schema(),
    }
}
