// ============================================================
// JOB ASSIGNMENT DOMAIN LAYER
// ============================================================

mod assignment;
mod status;

pub use assignment::JobAssignment;
pub use status::JobStatus;
