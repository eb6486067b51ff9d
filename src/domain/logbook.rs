// ============================================================
// DAILY LOG
// ============================================================
// Append-only per-day activity entries with substring search.
// Entries are plain strings; callers format "HH:MM — message".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyLog {
    /// Date -> entries in append order
    days: BTreeMap<NaiveDate, Vec<String>>,
}

impl DailyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, date: NaiveDate, entry: impl Into<String>) {
        self.days.entry(date).or_default().push(entry.into());
    }

    /// All entries for a day, in append order
    pub fn entries_for(&self, date: NaiveDate) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Entries for a day matching a case-insensitive substring.
    /// A blank term returns everything.
    pub fn search(&self, date: NaiveDate, term: &str) -> Vec<&String> {
        let needle = term.trim().to_lowercase();
        self.entries_for(date)
            .iter()
            .filter(|e| needle.is_empty() || e.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }
}
