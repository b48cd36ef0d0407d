//! XLSX encoding of an assembled workbook

use crate::error::ExtractorError;
use sheetsmith_domain::Workbook;
use tracing::debug;

/// Name of the placeholder sheet written when no table was found.
///
/// The XLSX format requires at least one worksheet.
pub const EMPTY_SHEET_NAME: &str = "No Tables";

/// Encode a workbook into an in-memory XLSX buffer.
///
/// Every cell is written as a string. Empty cells and separator rows are left
/// blank.
pub fn encode_workbook(workbook: &Workbook) -> Result<Vec<u8>, ExtractorError> {
    let mut xlsx = rust_xlsxwriter::Workbook::new();

    if workbook.is_empty() {
        xlsx.add_worksheet().set_name(EMPTY_SHEET_NAME)?;
    }

    for sheet in workbook.sheets() {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let row_num = u32::try_from(row_idx).map_err(|_| {
                ExtractorError::Workbook(format!("sheet '{}' has too many rows", sheet.name()))
            })?;
            for (col_idx, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let col_num = u16::try_from(col_idx).map_err(|_| {
                    ExtractorError::Workbook(format!("sheet '{}' has too many columns", sheet.name()))
                })?;
                worksheet.write_string(row_num, col_num, cell.as_str())?;
            }
        }

        debug!(
            "Wrote sheet '{}': {} rows, {} columns",
            sheet.name(),
            sheet.rows.len(),
            sheet.column_count()
        );
    }

    Ok(xlsx.save_to_buffer()?)
}
