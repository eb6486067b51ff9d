// ============================================================
// HEADER LOCATOR
// ============================================================
// The export carries arbitrary banner/summary rows above the real
// header. Either sniff for the known marker labels or trust a
// caller-supplied offset; never silently default, because a wrong
// guess turns data rows into structure.

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::HeaderStrategy;

/// Marker labels that identify the header row (normalized form)
pub const FAMILY_MARKER: &str = "family";
pub const PART_NUMBER_MARKER: &str = "part number";

/// Normalize a header cell for label comparison (trim + lowercase)
pub fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase()
}

pub struct HeaderLocator {
    strategy: HeaderStrategy,
}

impl HeaderLocator {
    pub fn new(strategy: HeaderStrategy) -> Self {
        Self { strategy }
    }

    /// Find the header row index in the raw row list
    pub fn locate(&self, rows: &[Vec<String>]) -> Result<usize> {
        match &self.strategy {
            HeaderStrategy::Sniff => self.sniff(rows),
            HeaderStrategy::FixedOffset(index) => {
                if *index < rows.len() {
                    Ok(*index)
                } else {
                    Err(AppError::HeaderNotFound {
                        strategy: self.strategy.describe(),
                    })
                }
            }
        }
    }

    /// First row containing both marker labels as exact
    /// case-insensitive trimmed cell values
    fn sniff(&self, rows: &[Vec<String>]) -> Result<usize> {
        for (index, row) in rows.iter().enumerate() {
            let has_family = row.iter().any(|c| normalize_header(c) == FAMILY_MARKER);
            let has_part = row.iter().any(|c| normalize_header(c) == PART_NUMBER_MARKER);
            if has_family && has_part {
                return Ok(index);
            }
        }

        Err(AppError::HeaderNotFound {
            strategy: self.strategy.describe(),
        })
    }
}
