// ============================================================
// TRAINING SERVICE
// ============================================================
// Stateful facade over the loader and query engine. A reload
// swaps the new matrix in one assignment only after a fully
// successful build; a failed reload leaves the prior matrix
// queryable and unchanged.

use std::path::Path;

use super::matrix_loader::MatrixLoader;
use crate::domain::error::Result;
use crate::domain::matrix::{MatrixLoadConfig, TrainedOperatorRecord, TrainingMatrix};

pub struct TrainingService {
    loader: MatrixLoader,
    matrix: Option<TrainingMatrix>,
}

impl TrainingService {
    pub fn new(config: MatrixLoadConfig) -> Self {
        Self {
            loader: MatrixLoader::new(config),
            matrix: None,
        }
    }

    pub fn default_config() -> Self {
        Self::new(MatrixLoadConfig::default())
    }

    /// Whether a sheet has been loaded successfully
    pub fn is_ready(&self) -> bool {
        self.matrix.is_some()
    }

    /// Current matrix, if any. A successful reload invalidates
    /// anything previously borrowed from here.
    pub fn matrix(&self) -> Option<&TrainingMatrix> {
        self.matrix.as_ref()
    }

    /// Load (or reload) the matrix from source text
    pub fn load_matrix(&mut self, content: &str) -> Result<&TrainingMatrix> {
        let matrix = self.loader.load_content(content)?;
        Ok(self.matrix.insert(matrix))
    }

    /// Load (or reload) the matrix from a file
    pub fn load_matrix_file(&mut self, path: &Path) -> Result<&TrainingMatrix> {
        let matrix = self.loader.load_file(path)?;
        Ok(self.matrix.insert(matrix))
    }

    /// Operators certified on a part; empty when no sheet is loaded
    pub fn trained_operators_for_part(&self, part_number: &str) -> Vec<TrainedOperatorRecord> {
        self.matrix
            .as_ref()
            .map(|m| m.trained_operators_for_part(part_number))
            .unwrap_or_default()
    }

    /// Parts an operator is involved with; empty when no sheet is loaded
    pub fn parts_for_operator(&self, operator_name: &str) -> Vec<String> {
        self.matrix
            .as_ref()
            .map(|m| m.parts_for_operator(operator_name))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    const SHEET: &str = "\
,Family,Part Number,Status,Alice,Bob
,F1,P100,Active,Trained,In Process";

    #[test]
    fn test_queries_before_load_return_empty() {
        let service = TrainingService::default_config();
        assert!(!service.is_ready());
        assert!(service.trained_operators_for_part("P100").is_empty());
        assert!(service.parts_for_operator("Alice").is_empty());
    }

    #[test]
    fn test_load_then_query() {
        let mut service = TrainingService::default_config();
        service.load_matrix(SHEET).unwrap();

        assert!(service.is_ready());
        let trained = service.trained_operators_for_part("P100");
        assert_eq!(trained.len(), 1);
        assert_eq!(trained[0].name, "Alice");
    }

    #[test]
    fn test_failed_reload_keeps_prior_matrix() {
        let mut service = TrainingService::default_config();
        service.load_matrix(SHEET).unwrap();

        let err = service.load_matrix("no,header,here").unwrap_err();
        assert!(matches!(err, AppError::HeaderNotFound { .. }));

        // Prior matrix still answers queries
        assert!(service.is_ready());
        assert_eq!(service.trained_operators_for_part("P100").len(), 1);
    }

    #[test]
    fn test_reload_replaces_wholesale() {
        let mut service = TrainingService::default_config();
        service.load_matrix(SHEET).unwrap();

        let second = "\
,Family,Part Number,Status,Carol
,F2,P900,Active,Trained";
        service.load_matrix(second).unwrap();

        assert!(service.trained_operators_for_part("P100").is_empty());
        assert_eq!(service.trained_operators_for_part("P900").len(), 1);
        assert_eq!(service.trained_operators_for_part("P900")[0].name, "Carol");
    }
}
