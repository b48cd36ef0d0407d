//! Sheetsmith CLI library.
//!
//! Offline conversion of local PDF files into XLSX workbooks using the same
//! pipeline as the server.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
