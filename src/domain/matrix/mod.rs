// ============================================================
// TRAINING MATRIX DOMAIN LAYER
// ============================================================
// Core types and predicates for the training matrix
// No I/O, no async, no external collaborators

mod level;
mod load_config;
mod operator;
mod part;
mod training_matrix;

pub use level::{is_involved, is_trained, normalize_level, REF_ERROR_MARKER, TRAINED_LEVELS};
pub use load_config::{ColumnStrategy, FixedColumnRange, HeaderStrategy, MatrixLoadConfig};
pub use operator::{Operator, TrainedOperatorRecord};
pub use part::{normalize_part_number, PartMetadata};
pub use training_matrix::TrainingMatrix;
