// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Raw parsing plus structural detection: header row discovery
// and column classification

mod column_classifier;
mod header_locator;
mod source_reader;

pub use column_classifier::{
    ColumnClassifier, ColumnMap, OperatorColumn, NON_OPERATOR_HEADERS,
};
pub use header_locator::{normalize_header, HeaderLocator, FAMILY_MARKER, PART_NUMBER_MARKER};
pub use source_reader::CsvSourceReader;
