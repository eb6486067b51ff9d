// ============================================================
// TRAINING MATRIX
// ============================================================
// Owned value object produced by one build pass. Queries are
// pure reads; a reload produces a whole new matrix.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::level;
use super::operator::{Operator, TrainedOperatorRecord};
use super::part::{normalize_part_number, PartMetadata};

/// The combined operator-trainings and part-metadata model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMatrix {
    /// Operator name -> operator (names unique within one build)
    pub operators: HashMap<String, Operator>,

    /// Normalized part number -> metadata (first row encountered wins)
    pub parts: HashMap<String, PartMetadata>,
}

impl TrainingMatrix {
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn part(&self, part_number: &str) -> Option<&PartMetadata> {
        self.parts.get(&normalize_part_number(part_number))
    }

    /// All operator names, sorted for stable dropdown population
    pub fn operator_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.operators.keys().cloned().collect();
        sort_ci(&mut names);
        names
    }

    /// All known part numbers (original spelling), sorted
    pub fn part_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self
            .parts
            .values()
            .map(|p| p.part_number.clone())
            .collect();
        sort_ci(&mut numbers);
        numbers
    }

    /// Operators certified on the given part, sorted ascending by name.
    ///
    /// Blank input returns an empty list, not an error. Only levels
    /// passing the trained predicate are included; "In Process" and
    /// friends are excluded because this feeds job assignment.
    pub fn trained_operators_for_part(&self, part_number: &str) -> Vec<TrainedOperatorRecord> {
        let key = normalize_part_number(part_number);
        if key.is_empty() {
            return Vec::new();
        }

        let mut records: Vec<TrainedOperatorRecord> = self
            .operators
            .values()
            .filter_map(|op| {
                let raw = op.trainings.get(&key)?;
                if level::is_trained(raw) {
                    Some(TrainedOperatorRecord {
                        name: op.name.clone(),
                        level: raw.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        records.sort_by(|a, b| {
            (a.name.to_lowercase(), &a.name).cmp(&(b.name.to_lowercase(), &b.name))
        });
        records
    }

    /// Part numbers an operator has any recorded relationship with,
    /// sorted ascending. Includes in-process levels, excludes blank
    /// cells and "#REF!" markers (informational view, not a
    /// certification check).
    pub fn parts_for_operator(&self, operator_name: &str) -> Vec<String> {
        let Some(op) = self.operators.get(operator_name.trim()) else {
            return Vec::new();
        };

        let mut numbers: Vec<String> = op
            .trainings
            .iter()
            .filter(|(_, raw)| level::is_involved(raw))
            .map(|(key, _)| {
                // Prefer the original spelling when the part is known
                self.parts
                    .get(key)
                    .map(|p| p.part_number.clone())
                    .unwrap_or_else(|| key.clone())
            })
            .collect();
        sort_ci(&mut numbers);
        numbers
    }
}

/// Case-insensitive-first sort, exact value as tie-break, so ordering
/// is deterministic without locale collation tables.
fn sort_ci(values: &mut [String]) {
    values.sort_by(|a, b| (a.to_lowercase(), a).cmp(&(b.to_lowercase(), b)));
}
