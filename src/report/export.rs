// Report export — CSV for spreadsheets, JSON for everything else.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use super::ArticleReport;
use crate::classify::{EntityPosition, NumericFormat, Style, Tone};

/// Separator between entities inside the single CSV `entities` field.
pub const ENTITY_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Flat CSV shape of a report row. Missing values become empty fields.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    title_length: usize,
    total_pageviews: u64,
    dominant_source: Option<&'a str>,
    dominant_source_pageviews: Option<u64>,
    dominant_source_share: Option<String>,
    entities: String,
    entity_count: usize,
    tone: Tone,
    has_quote: bool,
    entity_position: EntityPosition,
    style: Style,
    numeric_format: NumericFormat,
    has_numbers: bool,
    number_count: usize,
}

impl<'a> From<&'a ArticleReport> for CsvRow<'a> {
    fn from(row: &'a ArticleReport) -> Self {
        Self {
            title: &row.title,
            title_length: row.title_length,
            total_pageviews: row.total_pageviews,
            dominant_source: row.dominant_source.as_deref(),
            dominant_source_pageviews: row.dominant_source_pageviews,
            dominant_source_share: row.dominant_source_share.map(|s| format!("{s:.2}")),
            entities: row.entities.join(ENTITY_SEPARATOR),
            entity_count: row.entity_count,
            tone: row.tone,
            has_quote: row.has_quote,
            entity_position: row.entity_position,
            style: row.style,
            numeric_format: row.numeric_format,
            has_numbers: row.has_numbers,
            number_count: row.number_count,
        }
    }
}

/// Write rows as CSV: one header line, then one line per article.
/// Fields are quoted only when they contain a comma, quote or newline.
pub fn write_csv<W: Write>(rows: &[&ArticleReport], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(CsvRow::from(*row))
            .context("Failed to write CSV row")?;
    }
    // An empty report still gets its header line
    if rows.is_empty() {
        csv_writer.write_record(CSV_HEADERS)?;
    }
    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Column names of the CSV export, in order.
pub const CSV_HEADERS: [&str; 15] = [
    "title",
    "title_length",
    "total_pageviews",
    "dominant_source",
    "dominant_source_pageviews",
    "dominant_source_share",
    "entities",
    "entity_count",
    "tone",
    "has_quote",
    "entity_position",
    "style",
    "numeric_format",
    "has_numbers",
    "number_count",
];

/// Write rows as a pretty-printed JSON array.
pub fn write_json<W: Write>(rows: &[&ArticleReport], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, rows).context("Failed to write JSON report")?;
    Ok(())
}

pub fn to_csv_string(rows: &[&ArticleReport]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}

/// Export rows to a file in the given format.
pub fn export_to_path(rows: &[&ArticleReport], path: &Path, format: ExportFormat) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => write_csv(rows, &mut writer)?,
        ExportFormat::Json => write_json(rows, &mut writer)?,
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(rows = rows.len(), path = %path.display(), ?format, "Exported report");
    Ok(())
}
