// Untyped tables as exported by the analytics tool.
//
// A Table is a header row plus string rows. Headers are normalized on load
// (trimmed, lowercased, spaces to underscores) so "Source Internal",
// " source internal " and "source_internal" all end up the same.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// One data row with the line it came from (1-based, header is line 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub line: u64,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Display name used in errors and logs (usually the file name)
    pub name: String,
    headers: Vec<String>,
    rows: Vec<TableRow>,
}

/// Normalize a header: trim, lowercase, spaces to underscores.
/// A leading byte-order mark is dropped too.
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

impl Table {
    /// Build a table in memory. Headers are normalized; rows are numbered
    /// from line 2 as if they followed a header line.
    pub fn new(name: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| normalize_header(h)).collect(),
            rows: rows
                .into_iter()
                .enumerate()
                .map(|(i, fields)| TableRow {
                    line: i as u64 + 2,
                    fields,
                })
                .collect(),
        }
    }

    /// Load a comma-separated file with one header row.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_reader(&name, file)
    }

    /// Parse CSV from any reader. Rows may have a different number of fields
    /// than the header; short rows are caught when records are parsed.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .with_context(|| format!("{name}: cannot read header row"))?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result.with_context(|| format!("{name}: CSV parse error"))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            rows.push(TableRow {
                line,
                fields: record.iter().map(str::to_string).collect(),
            });
        }

        debug!(table = name, columns = headers.len(), rows = rows.len(), "Loaded table");

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first header equal to any of `candidates`.
    pub fn find_column(&self, candidates: &[&str]) -> Option<usize> {
        candidates
            .iter()
            .find_map(|c| self.headers.iter().position(|h| h == c))
    }

    pub fn has_column(&self, candidates: &[&str]) -> bool {
        self.find_column(candidates).is_some()
    }
}
