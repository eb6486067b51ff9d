// ============================================================
// JOB STATUS
// ============================================================
// Small workflow: Assigned -> In Progress -> Completed/Cancelled

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Active jobs show on the supervisor's working list; the
    /// others land in the completed table.
    pub fn is_active(&self) -> bool {
        matches!(self, JobStatus::Assigned | JobStatus::InProgress)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Assigned => write!(f, "Assigned"),
            JobStatus::InProgress => write!(f, "In Progress"),
            JobStatus::Completed => write!(f, "Completed"),
            JobStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "assigned" => Ok(JobStatus::Assigned),
            "in progress" | "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            other => Err(format!("Unknown job status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(JobStatus::Assigned.is_active());
        assert!(JobStatus::InProgress.is_active());
        assert!(!JobStatus::Completed.is_active());
        assert!(!JobStatus::Cancelled.is_active());
    }

    #[test]
    fn test_parse_display_strings() {
        assert_eq!("In Progress".parse::<JobStatus>(), Ok(JobStatus::InProgress));
        assert_eq!(" assigned ".parse::<JobStatus>(), Ok(JobStatus::Assigned));
        assert!("done".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for status in [
            JobStatus::Assigned,
            JobStatus::InProgress,
            JobStatus::Completed,
            JobStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<JobStatus>(), Ok(status));
        }
    }
}
