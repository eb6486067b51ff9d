// ============================================================
// OPERATOR
// ============================================================
// An operator exists only once they have at least one non-blank
// training cell; the builder creates these lazily.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::level;
use super::part::normalize_part_number;

/// A shop-floor operator and their raw per-part training levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    /// Operator name as it appears in the header row (unique key)
    pub name: String,

    /// Part number (normalized) -> raw level label as read from the sheet
    pub trainings: HashMap<String, String>,
}

impl Operator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trainings: HashMap::new(),
        }
    }

    /// Record a training cell for a part, overwriting any prior value
    /// for the same part (last-write-wins across duplicate rows).
    pub fn record_training(&mut self, part_number: &str, level: impl Into<String>) {
        self.trainings
            .insert(normalize_part_number(part_number), level.into());
    }

    /// Raw level label for a part, if any relationship is recorded
    pub fn level_for(&self, part_number: &str) -> Option<&str> {
        self.trainings
            .get(&normalize_part_number(part_number))
            .map(String::as_str)
    }

    /// Whether this operator is certified on the given part
    pub fn is_trained_on(&self, part_number: &str) -> bool {
        self.level_for(part_number).is_some_and(level::is_trained)
    }
}

/// Query result row for "who is trained on part P"; derived per
/// query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainedOperatorRecord {
    pub name: String,
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_training_normalizes_part_key() {
        let mut op = Operator::new("Alice");
        op.record_training(" p100 ", "Trained");
        assert_eq!(op.level_for("P100"), Some("Trained"));
        assert_eq!(op.level_for("p100"), Some("Trained"));
    }

    #[test]
    fn test_record_training_last_write_wins() {
        let mut op = Operator::new("Alice");
        op.record_training("P100", "In Process");
        op.record_training("P100", "Trained");
        assert_eq!(op.level_for("P100"), Some("Trained"));
    }

    #[test]
    fn test_is_trained_on() {
        let mut op = Operator::new("Bob");
        op.record_training("P100", "In Process");
        op.record_training("P200", "Trainer 1");
        assert!(!op.is_trained_on("P100"));
        assert!(op.is_trained_on("P200"));
        assert!(!op.is_trained_on("P999"));
    }
}
