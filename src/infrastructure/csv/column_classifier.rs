// ============================================================
// COLUMN CLASSIFIER
// ============================================================
// Given the header row, decide which columns are fixed metadata
// and which contiguous-ish run holds per-operator levels. All
// column-index policy lives here; nothing downstream re-derives
// indices from labels.

use serde::{Deserialize, Serialize};

use super::header_locator::{normalize_header, FAMILY_MARKER, PART_NUMBER_MARKER};
use crate::domain::error::{AppError, Result};
use crate::domain::matrix::{ColumnStrategy, FixedColumnRange};

pub const COMMON_NAME_LABEL: &str = "common name";
pub const DESCRIPTION_LABEL: &str = "description";
pub const STATUS_LABEL: &str = "status";

// Computed/summary columns that must never be read as operators,
// matched against normalized header labels.
pub const NON_OPERATOR_HEADERS: &[&str] = &[
    "family",
    "part number",
    "common name",
    "description",
    "rohs",
    "yearly demand hours",
    "status",
    "# trained",
    "demand filter",
    "trained hours",
    "hr shortage",
    "shortage filter",
    "single trainer filter",
    "single trained hours",
    "single trained op",
    "trainer 1",
    "trainer 2",
    "total trainers",
    "trained",
    "trainers",
];

/// One classified operator column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorColumn {
    pub index: usize,
    pub name: String,
}

/// Typed column descriptor produced by classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub part_number: usize,
    pub family: Option<usize>,
    pub common_name: Option<usize>,
    pub description: Option<usize>,
    pub status: Option<usize>,

    /// Operator columns in sheet order
    pub operators: Vec<OperatorColumn>,
}

impl ColumnMap {
    /// Highest column index this map can touch, for short-row padding
    pub fn max_index(&self) -> usize {
        let meta_max = [
            Some(self.part_number),
            self.family,
            self.common_name,
            self.description,
            self.status,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);

        self.operators
            .iter()
            .map(|c| c.index)
            .max()
            .unwrap_or(0)
            .max(meta_max)
    }
}

pub struct ColumnClassifier {
    strategy: ColumnStrategy,
}

impl ColumnClassifier {
    pub fn new(strategy: ColumnStrategy) -> Self {
        Self { strategy }
    }

    pub fn classify(&self, header_row: &[String]) -> Result<ColumnMap> {
        match &self.strategy {
            ColumnStrategy::NameDriven => self.classify_by_name(header_row),
            ColumnStrategy::FixedRange(range) => self.classify_fixed(header_row, range),
        }
    }

    fn classify_by_name(&self, header_row: &[String]) -> Result<ColumnMap> {
        let find = |label: &str| {
            header_row
                .iter()
                .position(|cell| normalize_header(cell) == label)
        };

        let part_number = find(PART_NUMBER_MARKER)
            .ok_or_else(|| AppError::RequiredColumnMissing("Part Number".to_string()))?;
        let family = find(FAMILY_MARKER);
        let common_name = find(COMMON_NAME_LABEL);
        let description = find(DESCRIPTION_LABEL);
        let status = find(STATUS_LABEL);

        let mut operators = Vec::new();
        for (index, cell) in header_row.iter().enumerate() {
            let norm = normalize_header(cell);
            if norm.is_empty() {
                continue;
            }
            // Denylisted labels are never operators, regardless of position
            if NON_OPERATOR_HEADERS.contains(&norm.as_str()) {
                continue;
            }
            // Everything up to and including Status is a computed block
            if let Some(status_col) = status {
                if index <= status_col {
                    continue;
                }
            }

            operators.push(OperatorColumn {
                index,
                name: cell.trim().to_string(),
            });
        }

        if operators.is_empty() {
            return Err(AppError::NoOperatorColumns);
        }

        Ok(ColumnMap {
            part_number,
            family,
            common_name,
            description,
            status,
            operators,
        })
    }

    fn classify_fixed(&self, header_row: &[String], range: &FixedColumnRange) -> Result<ColumnMap> {
        if range.part_number_col >= header_row.len() {
            return Err(AppError::RequiredColumnMissing("Part Number".to_string()));
        }

        // Operator names come from the header cells in the range;
        // blank-labeled columns are skipped entirely.
        let mut operators = Vec::new();
        for index in range.operator_start..=range.operator_end {
            let name = header_row
                .get(index)
                .map(|c| c.trim())
                .unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            operators.push(OperatorColumn {
                index,
                name: name.to_string(),
            });
        }

        if operators.is_empty() {
            return Err(AppError::NoOperatorColumns);
        }

        Ok(ColumnMap {
            part_number: range.part_number_col,
            family: range.family_col,
            common_name: range.common_name_col,
            description: range.description_col,
            status: range.status_col,
            operators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_name_driven_classification() {
        let row = header(&[
            "",
            "Family",
            "Part Number",
            "Common Name",
            "Description",
            "",
            "",
            "Status",
            "Alice",
            "Bob",
        ]);
        let map = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap();

        assert_eq!(map.part_number, 2);
        assert_eq!(map.family, Some(1));
        assert_eq!(map.common_name, Some(3));
        assert_eq!(map.status, Some(7));
        assert_eq!(map.operators.len(), 2);
        assert_eq!(map.operators[0], OperatorColumn { index: 8, name: "Alice".into() });
        assert_eq!(map.operators[1].name, "Bob");
    }

    #[test]
    fn test_denylisted_labels_after_status_are_not_operators() {
        let row = header(&[
            "Family",
            "Part Number",
            "Status",
            "Alice",
            "# Trained",
            "Shortage Filter",
            "Bob",
        ]);
        let map = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap();

        let names: Vec<&str> = map.operators.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_labels_are_skipped() {
        let row = header(&["Family", "Part Number", "Status", "Alice", "", "  ", "Bob"]);
        let map = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap();
        assert_eq!(map.operators.len(), 2);
    }

    #[test]
    fn test_operators_without_status_column() {
        // No Status column: every non-denylisted non-empty label counts
        let row = header(&["Family", "Part Number", "Alice"]);
        let map = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap();
        assert_eq!(map.status, None);
        assert_eq!(map.operators.len(), 1);
    }

    #[test]
    fn test_missing_part_number_column() {
        let row = header(&["Family", "Status", "Alice"]);
        let err = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap_err();
        match err {
            AppError::RequiredColumnMissing(label) => assert_eq!(label, "Part Number"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_no_operator_columns() {
        let row = header(&["Family", "Part Number", "Status", "# Trained"]);
        let err = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap_err();
        assert!(matches!(err, AppError::NoOperatorColumns));
    }

    #[test]
    fn test_fixed_range_classification() {
        let range = FixedColumnRange {
            part_number_col: 1,
            family_col: Some(0),
            common_name_col: None,
            description_col: None,
            status_col: Some(2),
            operator_start: 3,
            operator_end: 5,
        };
        let row = header(&["F", "P/N", "S", "Alice", "", "Bob"]);
        let map = ColumnClassifier::new(ColumnStrategy::FixedRange(range))
            .classify(&row)
            .unwrap();

        assert_eq!(map.part_number, 1);
        let names: Vec<&str> = map.operators.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_fixed_range_with_all_blank_names() {
        let range = FixedColumnRange {
            part_number_col: 0,
            family_col: None,
            common_name_col: None,
            description_col: None,
            status_col: None,
            operator_start: 1,
            operator_end: 2,
        };
        let row = header(&["P/N", "", ""]);
        let err = ColumnClassifier::new(ColumnStrategy::FixedRange(range))
            .classify(&row)
            .unwrap_err();
        assert!(matches!(err, AppError::NoOperatorColumns));
    }

    #[test]
    fn test_max_index() {
        let row = header(&["", "Family", "Part Number", "Status", "Alice", "Bob"]);
        let map = ColumnClassifier::new(ColumnStrategy::NameDriven)
            .classify(&row)
            .unwrap();
        assert_eq!(map.max_index(), 5);
    }
}
