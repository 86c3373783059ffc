//! Document text readers.
//!
//! The pipeline only needs a flat text blob; how the document got to text is
//! a collaborator concern behind [`DocumentReader`]. The built-in
//! [`TextFileReader`] handles plain-text, CSV and TSV exports of the intake
//! spreadsheet: cells are joined with spaces row by row and blank rows are
//! dropped, matching what the extraction prompt expects. Native `.xlsx`
//! parsing is out of scope; export the workbook to text first.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Provides the raw document text for a source path.
pub trait DocumentReader {
    fn read_text(&self, path: &Path) -> Result<String>;
}

/// Reads plain-text/CSV/TSV exports and flattens them into row-joined text.
#[derive(Debug, Default)]
pub struct TextFileReader;

impl DocumentReader for TextFileReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;

        let delimiter = match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Some(','),
            Some("tsv") => Some('\t'),
            _ => None,
        };

        Ok(flatten_rows(&content, delimiter))
    }
}

/// Join each row's non-empty cells with single spaces, dropping blank rows.
fn flatten_rows(content: &str, delimiter: Option<char>) -> String {
    let mut rows = Vec::new();

    for line in content.lines() {
        let cells: Vec<&str> = match delimiter {
            Some(d) => line.split(d).map(str::trim).filter(|c| !c.is_empty()).collect(),
            None => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    vec![]
                } else {
                    vec![trimmed]
                }
            }
        };

        if !cells.is_empty() {
            rows.push(cells.join(" "));
        }
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_flatten_csv_rows() {
        let content = "Project Name,Apollo Migration\n,,\nStart Date,2026-01-31\n";
        let flat = flatten_rows(content, Some(','));
        assert_eq!(flat, "Project Name Apollo Migration\nStart Date 2026-01-31");
    }

    #[test]
    fn test_flatten_plain_text_drops_blank_lines() {
        let content = "Header\n\n   \nWhy now: urgent\n";
        let flat = flatten_rows(content, None);
        assert_eq!(flat, "Header\nWhy now: urgent");
    }

    #[test]
    fn test_read_text_by_extension() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("intake.csv");
        fs::write(&path, "a,b\nc,d\n").unwrap();

        let reader = TextFileReader;
        assert_eq!(reader.read_text(&path).unwrap(), "a b\nc d");
    }

    #[test]
    fn test_missing_file_carries_path_context() {
        let reader = TextFileReader;
        let err = reader.read_text(Path::new("/nonexistent/intake.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/intake.txt"));
    }
}
