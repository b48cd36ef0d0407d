//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use sheetsmith_extractor::Conversion;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished conversion.
    pub fn format_conversion(&self, conversion: &Conversion, output: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_conversion_json(conversion, output),
            OutputFormat::Table => Ok(self.format_conversion_table(conversion, output)),
            OutputFormat::Quiet => Ok(output.display().to_string()),
        }
    }

    fn format_conversion_json(&self, conversion: &Conversion, output: &Path) -> Result<String> {
        let sheets: Vec<serde_json::Value> = conversion
            .workbook
            .sheets()
            .iter()
            .map(|sheet| {
                serde_json::json!({
                    "name": sheet.name(),
                    "variant": sheet.variant.key(),
                    "rows": sheet.rows.len(),
                    "columns": sheet.column_count(),
                })
            })
            .collect();

        let value = serde_json::json!({
            "output": output.display().to_string(),
            "model": conversion.metadata.model_name,
            "document_bytes": conversion.metadata.document_bytes,
            "tables": conversion.metadata.table_count,
            "processing_time_ms": conversion.metadata.processing_time_ms,
            "sheets": sheets,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_conversion_table(&self, conversion: &Conversion, output: &Path) -> String {
        let headline = self.success(&format!(
            "Wrote {} ({} tables, {} ms)",
            output.display(),
            conversion.metadata.table_count,
            conversion.metadata.processing_time_ms
        ));

        if conversion.workbook.is_empty() {
            return format!("{}\n{}", headline, self.warning("No tables found in the document."));
        }

        let mut builder = Builder::default();
        builder.push_record(["Sheet", "Rows", "Columns"]);
        for sheet in conversion.workbook.sheets() {
            builder.push_record([
                sheet.name().to_string(),
                sheet.rows.len().to_string(),
                sheet.column_count().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", headline, table)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
