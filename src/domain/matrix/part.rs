// ============================================================
// PART METADATA
// ============================================================
// One record per distinct part number; first occurrence wins
// when a part number recurs across rows.

use serde::{Deserialize, Serialize};

/// Normalize a part number for keying and lookups.
///
/// Trim + ASCII-uppercase, applied uniformly at build and query time
/// so scanner input and sheet cells can never disagree on casing.
pub fn normalize_part_number(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Fixed metadata carried alongside a part's training column block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartMetadata {
    /// Part number as first seen on the sheet (original spelling)
    pub part_number: String,

    pub family: String,
    pub common_name: String,
    pub description: String,
    pub status: String,
}

impl PartMetadata {
    pub fn new(
        part_number: impl Into<String>,
        family: impl Into<String>,
        common_name: impl Into<String>,
        description: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            family: family.into(),
            common_name: common_name.into(),
            description: description.into(),
            status: status.into(),
        }
    }

    /// Key used in the parts map
    pub fn key(&self) -> String {
        normalize_part_number(&self.part_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_part_number() {
        assert_eq!(normalize_part_number("  p100 "), "P100");
        assert_eq!(normalize_part_number("SWORD19-fg"), "SWORD19-FG");
        assert_eq!(normalize_part_number(""), "");
    }

    #[test]
    fn test_key_uses_normalized_form() {
        let part = PartMetadata::new("p100", "F1", "Widget", "desc", "Active");
        assert_eq!(part.key(), "P100");
        assert_eq!(part.part_number, "p100");
    }
}
