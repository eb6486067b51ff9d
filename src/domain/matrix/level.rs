// ============================================================
// TRAINING LEVEL PREDICATES
// ============================================================
// Level labels stay raw strings as read from the sheet; these
// predicates are the only interpretation applied to them.

/// Level labels that count as certified for job assignment.
pub const TRAINED_LEVELS: &[&str] = &["trained", "trainer 1", "trainer 2"];

/// Spreadsheet error marker excluded from "involved with" views.
pub const REF_ERROR_MARKER: &str = "#ref!";

/// Normalize a level label for comparison (trim + lowercase).
pub fn normalize_level(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Whether a raw level label counts as trained.
///
/// Matching is case-insensitive and whitespace-trimmed. Any other
/// non-empty label (e.g. "In Process") is a known level but not trained.
pub fn is_trained(label: &str) -> bool {
    let norm = normalize_level(label);
    TRAINED_LEVELS.iter().any(|l| norm == *l)
}

/// Whether a raw level label records any relationship at all:
/// non-empty and not a spreadsheet error marker.
///
/// Looser than [`is_trained`] on purpose: the browse view answers
/// "involved with", not "certified on", so in-process levels count.
pub fn is_involved(label: &str) -> bool {
    let norm = normalize_level(label);
    !norm.is_empty() && norm != REF_ERROR_MARKER
}
