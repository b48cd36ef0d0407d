//! Extracted tables and the three extraction variants.

/// One row of string cells
pub type Row = Vec<String>;

/// One table: rows in reading order
pub type Table = Vec<Row>;

/// Extraction strategy requested from the model.
///
/// All three variants are requested in a single call. The declaration order
/// here is the sheet order in the generated workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Model's best interpretation of each table
    BestEffort,
    /// Cleaned-up view with normalized headers
    StructuredView,
    /// Cell text exactly as printed
    RawData,
}

impl Variant {
    /// All variants in sheet order
    pub const ALL: [Variant; 3] = [Variant::BestEffort, Variant::StructuredView, Variant::RawData];

    /// JSON key used in the model's response
    pub fn key(self) -> &'static str {
        match self {
            Variant::BestEffort => "best_effort",
            Variant::StructuredView => "structured_view",
            Variant::RawData => "raw_data",
        }
    }

    /// Worksheet title
    pub fn sheet_name(self) -> &'static str {
        match self {
            Variant::BestEffort => "Best Effort",
            Variant::StructuredView => "Structured View",
            Variant::RawData => "Raw Data",
        }
    }

    /// Look up a variant by its JSON key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Tables extracted from one document, grouped by variant.
///
/// Any collection may be empty; an empty collection simply produces no sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Best-effort tables
    pub best_effort: Vec<Table>,
    /// Raw cell text tables
    pub raw_data: Vec<Table>,
    /// Structured view tables
    pub structured_view: Vec<Table>,
}

impl ExtractionResult {
    /// Tables for one variant
    pub fn tables(&self, variant: Variant) -> &[Table] {
        match variant {
            Variant::BestEffort => &self.best_effort,
            Variant::StructuredView => &self.structured_view,
            Variant::RawData => &self.raw_data,
        }
    }

    /// Mutable tables for one variant
    pub fn tables_mut(&mut self, variant: Variant) -> &mut Vec<Table> {
        match variant {
            Variant::BestEffort => &mut self.best_effort,
            Variant::StructuredView => &mut self.structured_view,
            Variant::RawData => &mut self.raw_data,
        }
    }

    /// Total number of tables across all variants
    pub fn table_count(&self) -> usize {
        Variant::ALL.iter().map(|v| self.tables(*v).len()).sum()
    }

    /// True when no variant holds a table
    pub fn is_empty(&self) -> bool {
        self.table_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order() {
        assert_eq!(
            Variant::ALL,
            [Variant::BestEffort, Variant::StructuredView, Variant::RawData]
        );
    }

    #[test]
    fn test_variant_keys_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_key(variant.key()), Some(variant));
        }
        assert_eq!(Variant::from_key("tables"), None);
    }

    #[test]
    fn test_table_count() {
        let mut result = ExtractionResult::default();
        assert!(result.is_empty());

        result.tables_mut(Variant::RawData).push(vec![vec!["a".to_string()]]);
        result.best_effort.push(vec![]);
        assert_eq!(result.table_count(), 2);
        assert_eq!(result.tables(Variant::RawData).len(), 1);
        assert!(result.tables(Variant::StructuredView).is_empty());
    }
}
