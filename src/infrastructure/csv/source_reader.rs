// ============================================================
// CSV SOURCE READER
// ============================================================
// Turn raw delimited text into a rectangular sequence of string
// rows. No header handling here: the sheet's real header row is
// buried below arbitrary leading rows and is located later.

use csv::ReaderBuilder;
use std::path::Path;

use crate::domain::error::{AppError, Result};

/// CSV reader with encoding and delimiter detection
pub struct CsvSourceReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CsvSourceReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a file and parse it into rows
    pub fn read_file(&self, path: &Path) -> Result<Vec<Vec<String>>> {
        let content = read_with_encoding_fallback(path)?;
        self.read_content(&content)
    }

    /// Parse delimited content into rows of strings.
    ///
    /// Rows keep their raw cell values (no trimming) and may have
    /// differing lengths; downstream code treats missing trailing
    /// cells as empty.
    pub fn read_content(&self, content: &str) -> Result<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::SourceRead(format!("Failed to parse row {}: {}", index + 1, e))
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(rows)
    }

    /// Parse content with automatic delimiter detection
    pub fn read_content_auto_detect(content: &str) -> Result<Vec<Vec<String>>> {
        let delimiter = Self::detect_delimiter(content);
        Self::default().with_delimiter(delimiter).read_content(content)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    /// by scoring per-line occurrence counts for consistency.
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            if sample_lines.is_empty() {
                continue;
            }

            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&c| c == delimiter).count())
                .collect();

            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Read a file trying UTF-8 first, then Windows-1252 (common for
/// spreadsheet exports), then lossy UTF-8 as a last resort.
fn read_with_encoding_fallback(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::SourceRead(format!("Failed to read {}: {}", path.display(), e)))?;

    if let Ok(content) = std::str::from_utf8(&bytes) {
        return Ok(content.to_string());
    }

    let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
    if !had_errors {
        return Ok(decoded.into_owned());
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_content() {
        let content = "a,b,c\nd,e,f";
        let rows = CsvSourceReader::new().read_content(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b", "c"]);
    }

    #[test]
    fn test_flexible_row_lengths() {
        let content = "a,b,c\nd\ne,f";
        let rows = CsvSourceReader::new().read_content(content).unwrap();
        assert_eq!(rows[1], vec!["d"]);
        assert_eq!(rows[2], vec!["e", "f"]);
    }

    #[test]
    fn test_cells_are_not_trimmed() {
        let content = "a , b\nc,d";
        let rows = CsvSourceReader::new().read_content(content).unwrap();
        assert_eq!(rows[0][0], "a ");
        assert_eq!(rows[0][1], " b");
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(CsvSourceReader::detect_delimiter("a,b,c\nd,e,f"), b',');
        assert_eq!(CsvSourceReader::detect_delimiter("a;b;c\nd;e;f"), b';');
        assert_eq!(CsvSourceReader::detect_delimiter("a\tb\nc\td"), b'\t');
    }

    #[test]
    fn test_auto_detect_parses_semicolons() {
        let rows = CsvSourceReader::read_content_auto_detect("a;b\nc;d").unwrap();
        assert_eq!(rows[0], vec!["a", "b"]);
    }
}
