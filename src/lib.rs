pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

mod app;

pub use app::run;
pub use application::use_cases::{JobBoard, MatrixLoader, TrainingService};
pub use domain::error::{AppError, Result};
pub use domain::matrix::{MatrixLoadConfig, TrainedOperatorRecord, TrainingMatrix};
