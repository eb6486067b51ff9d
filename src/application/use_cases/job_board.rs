// ============================================================
// JOB BOARD USE CASE
// ============================================================
// Session-scoped assignment list: assign, edit, remove, and the
// active/completed views with pagination. Edits and removals
// require supervisor initials; callers feed the returned change
// summaries into the daily log.

use uuid::Uuid;

use crate::domain::error::{AppError, Result};
use crate::domain::jobs::{JobAssignment, JobStatus};

/// Fixed page size for both assignment tables
pub const PAGE_SIZE: usize = 10;

/// One page of an assignment view, page number clamped into range
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a JobAssignment>,
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Default)]
pub struct JobBoard {
    assignments: Vec<JobAssignment>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&JobAssignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Assign a job to an operator for a scanned part
    pub fn assign(
        &mut self,
        job_number: &str,
        part_number: &str,
        operator: &str,
    ) -> Result<&JobAssignment> {
        let job_number = job_number.trim();
        let part_number = part_number.trim();
        let operator = operator.trim();

        if part_number.is_empty() {
            return Err(AppError::Validation("Scan a part before assigning a job".into()));
        }
        if operator.is_empty() {
            return Err(AppError::Validation("Select an operator before assigning a job".into()));
        }
        if job_number.is_empty() {
            return Err(AppError::Validation("Enter a job number before assigning".into()));
        }

        let index = self.assignments.len();
        self.assignments
            .push(JobAssignment::new(job_number, part_number, operator));
        Ok(&self.assignments[index])
    }

    /// Apply operator/status changes to an assignment.
    ///
    /// Requires non-blank initials. Returns `None` when nothing
    /// actually changed, otherwise a human-readable change summary
    /// for the daily log ("operator A → B, status X → Y").
    pub fn update(
        &mut self,
        id: Uuid,
        initials: &str,
        new_operator: Option<&str>,
        new_status: Option<JobStatus>,
    ) -> Result<Option<String>> {
        if initials.trim().is_empty() {
            return Err(AppError::Validation("Initials are required to save changes".into()));
        }

        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("assignment {}", id)))?;

        let mut changes = Vec::new();

        if let Some(operator) = new_operator.map(str::trim).filter(|o| !o.is_empty()) {
            if operator != assignment.operator {
                changes.push(format!("operator {} → {}", assignment.operator, operator));
                assignment.operator = operator.to_string();
            }
        }

        if let Some(status) = new_status {
            if status != assignment.status {
                changes.push(format!("status {} → {}", assignment.status, status));
                assignment.status = status;
            }
        }

        if changes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(changes.join(", ")))
        }
    }

    /// Remove an assignment; requires non-blank initials. Returns
    /// the removed record so callers can log it.
    pub fn remove(&mut self, id: Uuid, initials: &str) -> Result<JobAssignment> {
        if initials.trim().is_empty() {
            return Err(AppError::Validation("Initials are required to delete a job".into()));
        }

        let index = self
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("assignment {}", id)))?;

        Ok(self.assignments.remove(index))
    }

    /// Assigned and In Progress jobs, in assignment order
    pub fn active(&self) -> Vec<&JobAssignment> {
        self.assignments.iter().filter(|a| a.status.is_active()).collect()
    }

    /// Completed and Cancelled jobs, in assignment order
    pub fn completed(&self) -> Vec<&JobAssignment> {
        self.assignments.iter().filter(|a| !a.status.is_active()).collect()
    }

    pub fn active_page(&self, page: usize) -> PageView<'_> {
        paginate(self.active(), page)
    }

    pub fn completed_page(&self, page: usize) -> PageView<'_> {
        paginate(self.completed(), page)
    }
}

fn paginate(list: Vec<&JobAssignment>, page: usize) -> PageView<'_> {
    if list.is_empty() {
        return PageView { items: Vec::new(), page: 1, total_pages: 0 };
    }

    let total_pages = list.len().div_ceil(PAGE_SIZE);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(list.len());

    PageView {
        items: list[start..end].to_vec(),
        page,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(n: usize) -> JobBoard {
        let mut board = JobBoard::new();
        for i in 0..n {
            board.assign(&format!("J-{}", i), "P100", "Alice").unwrap();
        }
        board
    }

    #[test]
    fn test_assign_requires_all_fields() {
        let mut board = JobBoard::new();
        assert!(board.assign("", "P100", "Alice").is_err());
        assert!(board.assign("J-1", "  ", "Alice").is_err());
        assert!(board.assign("J-1", "P100", "").is_err());
        assert!(board.assign("J-1", "P100", "Alice").is_ok());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_workflow_assigned_to_completed() {
        let mut board = board_with(1);
        let id = board.active()[0].id;

        let summary = board
            .update(id, "JS", None, Some(JobStatus::InProgress))
            .unwrap()
            .unwrap();
        assert_eq!(summary, "status Assigned → In Progress");
        assert_eq!(board.active().len(), 1);

        board.update(id, "JS", None, Some(JobStatus::Completed)).unwrap();
        assert!(board.active().is_empty());
        assert_eq!(board.completed().len(), 1);
    }

    #[test]
    fn test_update_requires_initials() {
        let mut board = board_with(1);
        let id = board.active()[0].id;
        let err = board.update(id, "  ", None, Some(JobStatus::Completed)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // Nothing changed
        assert_eq!(board.active().len(), 1);
    }

    #[test]
    fn test_update_without_changes_returns_none() {
        let mut board = board_with(1);
        let id = board.active()[0].id;
        let result = board
            .update(id, "JS", Some("Alice"), Some(JobStatus::Assigned))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_reports_both_changes() {
        let mut board = board_with(1);
        let id = board.active()[0].id;
        let summary = board
            .update(id, "JS", Some("Bob"), Some(JobStatus::Cancelled))
            .unwrap()
            .unwrap();
        assert_eq!(summary, "operator Alice → Bob, status Assigned → Cancelled");
    }

    #[test]
    fn test_remove_requires_initials_and_returns_record() {
        let mut board = board_with(2);
        let id = board.active()[0].id;

        assert!(board.remove(id, "").is_err());
        let removed = board.remove(id, "JS").unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut board = board_with(1);
        let err = board.update(Uuid::new_v4(), "JS", None, None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_pagination_clamps_page_into_range() {
        let board = board_with(25);

        let first = board.active_page(0);
        assert_eq!(first.page, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), PAGE_SIZE);

        let last = board.active_page(99);
        assert_eq!(last.page, 3);
        assert_eq!(last.items.len(), 5);
    }

    #[test]
    fn test_empty_board_pagination() {
        let board = JobBoard::new();
        let view = board.active_page(1);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
    }
}
