pub mod error;
pub mod jobs;
pub mod logbook;
pub mod matrix;
