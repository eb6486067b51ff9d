// ============================================================
// TRAINING MATRIX BUILDER
// ============================================================
// Walk data rows after the header and build the normalized
// operator/part model. Pure computation: every call produces a
// whole new matrix, never a merge into an existing one.

use crate::domain::matrix::{normalize_part_number, Operator, PartMetadata, TrainingMatrix};
use crate::infrastructure::csv::ColumnMap;

pub struct MatrixBuilder;

impl MatrixBuilder {
    /// Build the matrix from raw rows.
    ///
    /// Policies, per (part, operator) pair across duplicate
    /// part-number rows:
    /// - part metadata: first row wins, later duplicates discarded
    /// - training cells: last non-blank cell wins; a blank cell is
    ///   skipped and never clears an earlier recorded level
    ///
    /// Operators are created lazily on their first non-blank cell, so
    /// an operator column that is blank on every row yields no
    /// operator at all. Blank part-number rows (separators, footers)
    /// and missing trailing cells are tolerated silently.
    pub fn build(rows: &[Vec<String>], header_index: usize, columns: &ColumnMap) -> TrainingMatrix {
        let mut matrix = TrainingMatrix::default();
        let mut processed = 0usize;
        let mut skipped = 0usize;

        for row in rows.iter().skip(header_index + 1) {
            let part_number_raw = cell(row, columns.part_number);
            if part_number_raw.is_empty() {
                skipped += 1;
                continue;
            }
            processed += 1;

            let part_key = normalize_part_number(part_number_raw);
            matrix.parts.entry(part_key.clone()).or_insert_with(|| {
                PartMetadata::new(
                    part_number_raw,
                    opt_cell(row, columns.family),
                    opt_cell(row, columns.common_name),
                    opt_cell(row, columns.description),
                    opt_cell(row, columns.status),
                )
            });

            for op_col in &columns.operators {
                let level = cell(row, op_col.index);
                if level.is_empty() {
                    continue;
                }

                matrix
                    .operators
                    .entry(op_col.name.clone())
                    .or_insert_with(|| Operator::new(op_col.name.clone()))
                    .record_training(&part_key, level);
            }
        }

        tracing::debug!(
            rows_processed = processed,
            rows_skipped = skipped,
            operators = matrix.operator_count(),
            parts = matrix.part_count(),
            "training matrix built"
        );

        matrix
    }
}

/// Trimmed cell value; rows shorter than the column index read as empty
fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(|c| c.trim()).unwrap_or("")
}

fn opt_cell(row: &[String], index: Option<usize>) -> &str {
    index.map(|i| cell(row, i)).unwrap_or("")
}
