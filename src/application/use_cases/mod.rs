// ============================================================
// APPLICATION USE CASES
// ============================================================

mod job_board;
mod matrix_builder;
mod matrix_loader;
mod training_service;

pub use job_board::{JobBoard, PageView, PAGE_SIZE};
pub use matrix_builder::MatrixBuilder;
pub use matrix_loader::MatrixLoader;
pub use training_service::TrainingService;
