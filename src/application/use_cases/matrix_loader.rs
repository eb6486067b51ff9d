// ============================================================
// MATRIX LOADER USE CASE
// ============================================================
// Orchestrate read -> locate header -> classify columns -> build.
// Runs to completion as one unit of work; errors abort the whole
// load and nothing partial escapes.

use std::path::Path;

use super::matrix_builder::MatrixBuilder;
use crate::domain::error::{AppError, Result};
use crate::domain::matrix::{MatrixLoadConfig, TrainingMatrix};
use crate::infrastructure::csv::{ColumnClassifier, CsvSourceReader, HeaderLocator};

/// Training matrix load pipeline
pub struct MatrixLoader {
    config: MatrixLoadConfig,
}

impl MatrixLoader {
    pub fn new(config: MatrixLoadConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration (sniffed header, name-driven columns)
    pub fn default_config() -> Self {
        Self::new(MatrixLoadConfig::default())
    }

    pub fn config(&self) -> &MatrixLoadConfig {
        &self.config
    }

    /// Load a matrix from a CSV file on disk
    pub fn load_file(&self, path: &Path) -> Result<TrainingMatrix> {
        let rows = CsvSourceReader::new().read_file(path)?;
        self.load_rows(rows)
    }

    /// Load a matrix from already-fetched source text
    pub fn load_content(&self, content: &str) -> Result<TrainingMatrix> {
        let rows = CsvSourceReader::new().read_content(content)?;
        self.load_rows(rows)
    }

    fn load_rows(&self, rows: Vec<Vec<String>>) -> Result<TrainingMatrix> {
        self.config
            .validate()
            .map_err(|e| AppError::Validation(format!("Invalid load config: {}", e)))?;

        let header_index = HeaderLocator::new(self.config.header_strategy.clone()).locate(&rows)?;

        let columns =
            ColumnClassifier::new(self.config.column_strategy.clone()).classify(&rows[header_index])?;

        let matrix = MatrixBuilder::build(&rows, header_index, &columns);

        tracing::info!(
            header_index,
            operator_columns = columns.operators.len(),
            operators = matrix.operator_count(),
            parts = matrix.part_count(),
            "training sheet loaded"
        );

        Ok(matrix)
    }
}
