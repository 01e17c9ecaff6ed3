// Report builder: classify every reconciled row once, then rank by readership.

use indicatif::ProgressBar;
use tracing::info;

use super::{ArticleReport, Report};
use crate::classify::classify_title;
use crate::entities::EntityExtractor;
use crate::nlp::Analyzer;
use crate::traffic::ReconciledRow;

/// Build the report without progress output.
pub fn build_report(
    rows: Vec<ReconciledRow>,
    analyzer: &dyn Analyzer,
    extractor: &EntityExtractor,
) -> Report {
    build_report_with_progress(rows, analyzer, extractor, &ProgressBar::hidden())
}

/// Build the report, ticking `progress` once per classified row.
///
/// Rows are sorted by total pageviews, highest first. The sort is stable, so
/// articles with equal totals keep their input order.
pub fn build_report_with_progress(
    rows: Vec<ReconciledRow>,
    analyzer: &dyn Analyzer,
    extractor: &EntityExtractor,
    progress: &ProgressBar,
) -> Report {
    let mut articles: Vec<ArticleReport> = rows
        .into_iter()
        .map(|row| {
            let classification = classify_title(analyzer, extractor, &row.title);
            progress.inc(1);
            ArticleReport::from_parts(row, classification)
        })
        .collect();
    progress.finish_and_clear();

    articles.sort_by(|a, b| b.total_pageviews.cmp(&a.total_pageviews));

    info!(
        rows = articles.len(),
        analyzer = analyzer.name(),
        "Built enriched report"
    );

    Report::new(articles)
}
