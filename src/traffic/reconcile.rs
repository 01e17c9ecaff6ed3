// Dominant-source reconciliation.
//
// The breakdown export has one row per (article, source, period); the totals
// export has one row per article. We sum the breakdown per (title, source),
// pick each title's biggest source, and left-join that onto the totals.
//
// Grouping uses a BTreeMap, so grouped order is title then source name. The
// first maximum in that order wins a tie, which means the lexicographically
// smallest source name.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::ReconcileError;
use super::records::{
    parse_breakdown, parse_totals, BreakdownColumns, RowRejection, TotalsColumns,
    TotalsRecord, TrafficRecord,
};
use super::table::Table;

pub const TITLE_COLUMN: &str = "title";
/// The discriminator: only the breakdown table has it. The second spelling
/// is what the raw "sourceInternal" header normalizes to.
pub const SOURCE_COLUMNS: [&str; 2] = ["source_internal", "sourceinternal"];
pub const PAGEVIEW_COLUMNS: [&str; 2] = ["pageviews_total", "pageviewstotal"];

/// The biggest traffic source of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominantSource {
    pub article_title: String,
    pub source_name: String,
    pub source_pageviews: u64,
}

/// One totals row with its dominant source attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledRow {
    pub title: String,
    pub total_pageviews: u64,
    pub dominant: Option<DominantSource>,
    /// Dominant pageviews as a percentage of the total, 2 decimals.
    /// None when there is no dominant source or the total is zero.
    pub share: Option<f64>,
}

/// Reconciled rows plus every input row that was rejected on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reconciliation {
    pub rows: Vec<ReconciledRow>,
    pub rejected: Vec<RowRejection>,
}

/// Decide which table is the breakdown and which is the totals, by looking
/// for the source column. Returns `(breakdown, totals)`.
pub fn identify_tables<'a>(
    first: &'a Table,
    second: &'a Table,
) -> Result<(&'a Table, &'a Table), ReconcileError> {
    match (
        first.has_column(&SOURCE_COLUMNS),
        second.has_column(&SOURCE_COLUMNS),
    ) {
        (true, false) => Ok((first, second)),
        (false, true) => Ok((second, first)),
        (both, _) => Err(ReconcileError::AmbiguousInput { both }),
    }
}

/// Sum pageviews per (title, source).
pub fn aggregate_sources(records: &[TrafficRecord]) -> BTreeMap<(String, String), u64> {
    let mut groups: BTreeMap<(String, String), u64> = BTreeMap::new();
    for record in records {
        let entry = groups
            .entry((record.article_title.clone(), record.source_name.clone()))
            .or_insert(0);
        *entry = entry.saturating_add(record.pageviews);
    }
    groups
}

/// Pick the biggest source of every title from the grouped sums.
/// Ties keep the first source in grouped (alphabetical) order.
pub fn dominant_sources(
    groups: &BTreeMap<(String, String), u64>,
) -> BTreeMap<String, DominantSource> {
    let mut dominant: BTreeMap<String, DominantSource> = BTreeMap::new();

    for ((title, source), &pageviews) in groups {
        match dominant.get_mut(title) {
            Some(current) if pageviews > current.source_pageviews => {
                current.source_name = source.clone();
                current.source_pageviews = pageviews;
            }
            Some(_) => {}
            None => {
                dominant.insert(
                    title.clone(),
                    DominantSource {
                        article_title: title.clone(),
                        source_name: source.clone(),
                        source_pageviews: pageviews,
                    },
                );
            }
        }
    }

    dominant
}

/// Percentage of `total` that `part` represents, rounded to 2 decimals with
/// ties to even (1/32 is 3.12, not 3.13). A zero total has no meaningful share.
pub fn share(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let percent = part as f64 / total as f64 * 100.0;
    Some((percent * 100.0).round_ties_even() / 100.0)
}

/// Join dominant sources onto the totals, one output row per totals record.
pub fn reconcile_records(
    breakdown: &[TrafficRecord],
    totals: &[TotalsRecord],
) -> Vec<ReconciledRow> {
    let groups = aggregate_sources(breakdown);
    let dominant = dominant_sources(&groups);
    debug!(
        groups = groups.len(),
        titles = dominant.len(),
        "Aggregated source breakdown"
    );

    totals
        .iter()
        .map(|record| {
            let source = dominant.get(&record.article_title).cloned();
            let percent = source
                .as_ref()
                .and_then(|d| share(d.source_pageviews, record.total_pageviews));
            ReconciledRow {
                title: record.article_title.clone(),
                total_pageviews: record.total_pageviews,
                dominant: source,
                share: percent,
            }
        })
        .collect()
}

/// Reconcile two raw tables given in any order.
pub fn reconcile(first: &Table, second: &Table) -> Result<Reconciliation, ReconcileError> {
    let (breakdown_table, totals_table) = identify_tables(first, second)?;
    info!(
        breakdown = %breakdown_table.name,
        totals = %totals_table.name,
        "Identified input tables"
    );

    let breakdown_columns = BreakdownColumns {
        title: require_column(breakdown_table, &[TITLE_COLUMN])?,
        source: require_column(breakdown_table, &SOURCE_COLUMNS)?,
        pageviews: require_column(breakdown_table, &PAGEVIEW_COLUMNS)?,
    };
    let totals_columns = TotalsColumns {
        title: require_column(totals_table, &[TITLE_COLUMN])?,
        pageviews: require_column(totals_table, &PAGEVIEW_COLUMNS)?,
    };

    let breakdown = parse_breakdown(breakdown_table, breakdown_columns);
    let totals = parse_totals(totals_table, totals_columns);

    let mut rejected = breakdown.rejected;
    rejected.extend(totals.rejected);
    for rejection in &rejected {
        warn!(%rejection, "Rejected malformed row");
    }

    warn_duplicate_titles(&totals.records);

    let rows = reconcile_records(&breakdown.records, &totals.records);
    let unmatched = rows.iter().filter(|r| r.dominant.is_none()).count();
    info!(
        rows = rows.len(),
        unmatched,
        rejected = rejected.len(),
        "Reconciled traffic"
    );

    Ok(Reconciliation { rows, rejected })
}

fn require_column(table: &Table, candidates: &[&str]) -> Result<usize, ReconcileError> {
    table
        .find_column(candidates)
        .ok_or_else(|| ReconcileError::MissingColumn {
            table: table.name.clone(),
            column: candidates[0].to_string(),
        })
}

/// Totals are keyed by title; repeated titles each keep their own row.
fn warn_duplicate_titles(totals: &[TotalsRecord]) {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for record in totals {
        *seen.entry(record.article_title.as_str()).or_insert(0) += 1;
    }
    for (title, count) in seen.into_iter().filter(|(_, c)| *c > 1) {
        warn!(title, count, "Title appears more than once in the totals table");
    }
}
