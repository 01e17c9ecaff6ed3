// The enriched per-article report.
//
// Rows are built once by the builder and never modified afterwards; keyword
// filtering and export only borrow them.

pub mod builder;
pub mod export;
pub mod filter;

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::classify::{EntityPosition, NumericFormat, Style, TitleClassification, Tone};
use crate::entities::EntitySet;
use crate::traffic::ReconciledRow;

pub use builder::{build_report, build_report_with_progress};
pub use export::ExportFormat;
pub use filter::KeywordFilter;

/// One article: traffic facts plus everything the classifiers found.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleReport {
    pub title: String,
    pub total_pageviews: u64,
    pub dominant_source: Option<String>,
    pub dominant_source_pageviews: Option<u64>,
    /// 0-100 with 2 decimals; None when undefined
    pub dominant_source_share: Option<f64>,
    /// Length in characters, not bytes
    pub title_length: usize,
    pub entities: EntitySet,
    pub entity_count: usize,
    pub tone: Tone,
    pub has_quote: bool,
    pub entity_position: EntityPosition,
    pub style: Style,
    pub numeric_format: NumericFormat,
    pub has_numbers: bool,
    pub number_count: usize,
}

impl ArticleReport {
    pub fn from_parts(row: ReconciledRow, classification: TitleClassification) -> Self {
        let (dominant_source, dominant_source_pageviews) = match row.dominant {
            Some(d) => (Some(d.source_name), Some(d.source_pageviews)),
            None => (None, None),
        };

        Self {
            title_length: row.title.chars().count(),
            title: row.title,
            total_pageviews: row.total_pageviews,
            dominant_source,
            dominant_source_pageviews,
            dominant_source_share: row.share,
            entity_count: classification.entities.len(),
            entities: classification.entities,
            tone: classification.tone,
            has_quote: classification.has_quote,
            entity_position: classification.entity_position,
            style: classification.style,
            numeric_format: classification.numeric.format,
            has_numbers: classification.numeric.has_numbers,
            number_count: classification.numeric.count,
        }
    }
}

/// Report rows ordered by total pageviews, highest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<ArticleReport>,
}

impl Report {
    pub(crate) fn new(rows: Vec<ArticleReport>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ArticleReport] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose title contains `term` as a whole word, ignoring case.
    /// A blank term selects every row.
    pub fn filter(&self, term: &str) -> Result<Vec<&ArticleReport>> {
        let filter = KeywordFilter::new(term)?;
        Ok(self.rows.iter().filter(|r| filter.matches(&r.title)).collect())
    }

    /// Every row, in report order.
    pub fn all(&self) -> Vec<&ArticleReport> {
        self.rows.iter().collect()
    }

    /// Write the full report to `path`. Keyword filters only narrow what is
    /// displayed, never what is exported.
    pub fn export(&self, path: &Path, format: ExportFormat) -> Result<()> {
        export::export_to_path(&self.all(), path, format)
    }
}
