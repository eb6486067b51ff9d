pub mod use_cases;

pub use use_cases::{JobBoard, MatrixBuilder, MatrixLoader, TrainingService};
