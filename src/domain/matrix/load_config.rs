// ============================================================
// MATRIX LOAD CONFIGURATION
// ============================================================
// One strategy selector per detection phase instead of parallel
// code paths; content sniffing + name-driven columns is the
// default, fixed layout is the explicit override.

use serde::{Deserialize, Serialize};

/// How the header row is located
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeaderStrategy {
    /// Scan top-to-bottom for a row carrying both the "Family" and
    /// "Part Number" labels (default)
    Sniff,

    /// Header is at a caller-specified row index; fail fast if absent
    FixedOffset(usize),
}

impl HeaderStrategy {
    /// Human-readable description, carried in HeaderNotFound errors
    pub fn describe(&self) -> String {
        match self {
            HeaderStrategy::Sniff => {
                "content sniffing for 'Family' and 'Part Number' labels".to_string()
            }
            HeaderStrategy::FixedOffset(index) => format!("fixed offset at row {}", index),
        }
    }
}

/// Hardcoded column layout for sheets with a known fixed shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedColumnRange {
    pub part_number_col: usize,
    pub family_col: Option<usize>,
    pub common_name_col: Option<usize>,
    pub description_col: Option<usize>,
    pub status_col: Option<usize>,

    /// Contiguous operator column block, inclusive on both ends
    pub operator_start: usize,
    pub operator_end: usize,
}

impl FixedColumnRange {
    /// Layout of the legacy training sheet export: metadata in
    /// columns 1-7, operator block in columns 16-38.
    pub fn legacy_sheet() -> Self {
        Self {
            part_number_col: 2,
            family_col: Some(1),
            common_name_col: Some(3),
            description_col: Some(4),
            status_col: Some(7),
            operator_start: 16,
            operator_end: 38,
        }
    }
}

/// How metadata and operator columns are identified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnStrategy {
    /// Locate every column by header label; operator columns are the
    /// non-denylisted labels after the status column (default)
    NameDriven,

    /// Hardcoded indices and operator range
    FixedRange(FixedColumnRange),
}

/// Configuration for one matrix load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixLoadConfig {
    pub header_strategy: HeaderStrategy,
    pub column_strategy: ColumnStrategy,
}

impl Default for MatrixLoadConfig {
    fn default() -> Self {
        Self {
            header_strategy: HeaderStrategy::Sniff,
            column_strategy: ColumnStrategy::NameDriven,
        }
    }
}

impl MatrixLoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config matching the legacy export: header at row 12 (row 13 in
    /// the spreadsheet), fixed metadata and operator columns.
    pub fn legacy_sheet() -> Self {
        Self {
            header_strategy: HeaderStrategy::FixedOffset(12),
            column_strategy: ColumnStrategy::FixedRange(FixedColumnRange::legacy_sheet()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if let ColumnStrategy::FixedRange(range) = &self.column_strategy {
            if range.operator_start > range.operator_end {
                return Err(format!(
                    "operator_start ({}) must be <= operator_end ({})",
                    range.operator_start, range.operator_end
                ));
            }
            if (range.operator_start..=range.operator_end).contains(&range.part_number_col) {
                return Err(
                    "part_number_col must lie outside the operator column range".to_string(),
                );
            }
        }
        Ok(())
    }
}
