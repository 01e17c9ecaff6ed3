// Report pipeline: two CSV exports in, ranked and classified report out.
//
// Strategy: load both files, let the reconciler decide which one is the
// per-source breakdown, classify every reconciled title once, then sort by
// total pageviews. Malformed input rows are carried along so the caller
// can show what was skipped.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::entities::EntityExtractor;
use crate::nlp::Analyzer;
use crate::report::{build_report, build_report_with_progress, Report};
use crate::traffic::{reconcile, RowRejection, Table};

/// What a pipeline run produces.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub report: Report,
    pub rejected: Vec<RowRejection>,
}

/// Run the report pipeline over two CSV files given in any order.
///
/// Shows a progress bar while classifying titles.
pub fn run(
    first: &Path,
    second: &Path,
    analyzer: &dyn Analyzer,
    extractor: &EntityExtractor,
) -> Result<PipelineOutput> {
    let (first_table, second_table) = load_pair(first, second)?;

    let reconciliation = reconcile(&first_table, &second_table)?;

    let pb = ProgressBar::new(reconciliation.rows.len() as u64);
    pb.set_style(progress_style()?);

    let report = build_report_with_progress(reconciliation.rows, analyzer, extractor, &pb);
    info!(
        articles = report.len(),
        rejected = reconciliation.rejected.len(),
        "Report pipeline complete"
    );

    Ok(PipelineOutput {
        report,
        rejected: reconciliation.rejected,
    })
}

/// Run the pipeline over tables already in memory, without progress output.
pub fn run_tables(
    first: &Table,
    second: &Table,
    analyzer: &dyn Analyzer,
    extractor: &EntityExtractor,
) -> Result<PipelineOutput> {
    let reconciliation = reconcile(first, second)?;
    let report = build_report(reconciliation.rows, analyzer, extractor);

    Ok(PipelineOutput {
        report,
        rejected: reconciliation.rejected,
    })
}

fn load_pair(first: &Path, second: &Path) -> Result<(Table, Table)> {
    println!("Loading {} and {}...", first.display(), second.display());
    let first_table = Table::from_path(first)?;
    let second_table = Table::from_path(second)?;
    info!(
        first_rows = first_table.len(),
        second_rows = second_table.len(),
        "Loaded pageview exports"
    );
    Ok((first_table, second_table))
}

fn progress_style() -> Result<ProgressStyle> {
    ProgressStyle::default_bar()
        .template("  Classifying [{bar:30}] {pos}/{len} ({eta})")
        .context("Invalid progress bar template")
}
