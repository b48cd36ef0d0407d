//! Workbook assembly from extraction results.
//!
//! A [`Workbook`] is the format-neutral plan for the spreadsheet returned to
//! the client. Binary encoding happens in the extractor crate.

use crate::table::{ExtractionResult, Row, Variant};

/// One named worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Variant this sheet was built from
    pub variant: Variant,
    /// Rows in output order, including blank separator rows
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Build a sheet by concatenating tables.
    ///
    /// Exactly one empty row separates successive tables. No blank row is
    /// placed before the first table or after the last.
    pub fn from_tables(variant: Variant, tables: &[Vec<Row>]) -> Self {
        let mut rows = Vec::with_capacity(tables.iter().map(|t| t.len() + 1).sum());
        for (idx, table) in tables.iter().enumerate() {
            if idx > 0 {
                rows.push(Row::new());
            }
            rows.extend(table.iter().cloned());
        }
        Self { variant, rows }
    }

    /// Worksheet title
    pub fn name(&self) -> &'static str {
        self.variant.sheet_name()
    }

    /// Widest row in the sheet
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Ordered collection of sheets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Assemble a workbook from an extraction result.
    ///
    /// One sheet per variant that holds at least one table, in
    /// [`Variant::ALL`] order. The result may have zero to three sheets.
    pub fn from_extraction(result: &ExtractionResult) -> Self {
        let sheets = Variant::ALL
            .into_iter()
            .filter_map(|variant| {
                let tables = result.tables(variant);
                if tables.is_empty() {
                    None
                } else {
                    Some(Sheet::from_tables(variant, tables))
                }
            })
            .collect();

        Self { sheets }
    }

    /// Sheets in order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheet for a variant, if present
    pub fn sheet(&self, variant: Variant) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.variant == variant)
    }

    /// True when no sheet was produced
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_single_table_has_no_leading_blank_row() {
        let result = ExtractionResult {
            best_effort: vec![vec![row(&["A", "B"]), row(&["1", "2"])]],
            ..Default::default()
        };

        let workbook = Workbook::from_extraction(&result);
        assert_eq!(workbook.sheets().len(), 1);

        let sheet = &workbook.sheets()[0];
        assert_eq!(sheet.name(), "Best Effort");
        assert_eq!(sheet.rows, vec![row(&["A", "B"]), row(&["1", "2"])]);
    }

    #[test]
    fn test_two_tables_separated_by_one_blank_row() {
        let tables = vec![
            vec![row(&["h1"]), row(&["v1"])],
            vec![row(&["h2", "x"]), row(&["v2", "y"])],
        ];
        let sheet = Sheet::from_tables(Variant::RawData, &tables);

        assert_eq!(sheet.rows.len(), 5);
        assert_eq!(sheet.rows[2], Row::new());
        assert_eq!(sheet.rows[3], row(&["h2", "x"]));
        assert_eq!(sheet.rows.iter().filter(|r| r.is_empty()).count(), 1);
        assert_eq!(sheet.column_count(), 2);
    }

    #[test]
    fn test_empty_table_still_separated() {
        let tables = vec![vec![row(&["a"])], vec![], vec![row(&["b"])]];
        let sheet = Sheet::from_tables(Variant::BestEffort, &tables);
        assert_eq!(sheet.rows, vec![row(&["a"]), Row::new(), Row::new(), row(&["b"])]);
    }

    #[test]
    fn test_sheet_order_is_fixed() {
        let result = ExtractionResult {
            best_effort: vec![vec![row(&["be"])]],
            raw_data: vec![vec![row(&["raw"])]],
            structured_view: vec![vec![row(&["sv"])]],
        };

        let workbook = Workbook::from_extraction(&result);
        let names: Vec<_> = workbook.sheets().iter().map(Sheet::name).collect();
        assert_eq!(names, vec!["Best Effort", "Structured View", "Raw Data"]);
    }

    #[test]
    fn test_empty_variants_produce_no_sheets() {
        let workbook = Workbook::from_extraction(&ExtractionResult::default());
        assert!(workbook.is_empty());

        let result = ExtractionResult {
            structured_view: vec![vec![row(&["only"])]],
            ..Default::default()
        };
        let workbook = Workbook::from_extraction(&result);
        assert_eq!(workbook.sheets().len(), 1);
        assert!(workbook.sheet(Variant::StructuredView).is_some());
        assert!(workbook.sheet(Variant::BestEffort).is_none());
    }
}
