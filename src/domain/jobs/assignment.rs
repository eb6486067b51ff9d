// ============================================================
// JOB ASSIGNMENT
// ============================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::JobStatus;

/// A job handed to an operator for a scanned part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAssignment {
    pub id: Uuid,
    pub job_number: String,
    pub part_number: String,
    pub operator: String,
    pub status: JobStatus,
    pub assigned_at: DateTime<Utc>,
}

impl JobAssignment {
    /// New assignments always start in the Assigned state
    pub fn new(
        job_number: impl Into<String>,
        part_number: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_number: job_number.into(),
            part_number: part_number.into(),
            operator: operator.into(),
            status: JobStatus::Assigned,
            assigned_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assignment_starts_assigned() {
        let a = JobAssignment::new("J-42", "P100", "Alice");
        assert_eq!(a.status, JobStatus::Assigned);
        assert_eq!(a.job_number, "J-42");
        assert!(a.status.is_active());
    }

    #[test]
    fn test_assignments_get_distinct_ids() {
        let a = JobAssignment::new("J-1", "P100", "Alice");
        let b = JobAssignment::new("J-1", "P100", "Alice");
        assert_ne!(a.id, b.id);
    }
}
