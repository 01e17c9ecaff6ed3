// Unit tests for traffic reconciliation.
//
// Tests the reconciler through the public API: dominant source selection,
// share rounding, table identification by column, header aliases, malformed
// rows, and loading real CSV files from disk.

use std::fs;
use std::path::Path;

use titulares::traffic::reconcile::share;
use titulares::traffic::{reconcile, ReconcileError, Table};

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|f| f.to_string()).collect())
        .collect()
}

fn breakdown(data: &[&[&str]]) -> Table {
    Table::new(
        "breakdown.csv",
        &["title", "source_internal", "pageviews_total"],
        rows(data),
    )
}

fn totals(data: &[&[&str]]) -> Table {
    Table::new("totals.csv", &["title", "pageviews_total"], rows(data))
}

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================
// Dominant source and share
// ============================================================

#[test]
fn dominant_source_and_share() {
    let b = breakdown(&[
        &["Crisis en el gobierno", "Google Discover", "100"],
        &["Crisis en el gobierno", "Facebook", "50"],
    ]);
    let t = totals(&[&["Crisis en el gobierno", "150"]]);

    let result = reconcile(&b, &t).unwrap();
    assert_eq!(result.rows.len(), 1);
    let row = &result.rows[0];
    let dominant = row.dominant.as_ref().unwrap();
    assert_eq!(dominant.source_name, "Google Discover");
    assert_eq!(dominant.source_pageviews, 100);
    assert_eq!(row.share, Some(66.67));
    assert!(result.rejected.is_empty());
}

#[test]
fn periods_are_summed_per_source() {
    // Facebook wins once its two periods are added up
    let b = breakdown(&[
        &["Nota", "Google", "70"],
        &["Nota", "Facebook", "40"],
        &["Nota", "Facebook", "40"],
    ]);
    let t = totals(&[&["Nota", "160"]]);

    let row = &reconcile(&b, &t).unwrap().rows[0];
    let dominant = row.dominant.as_ref().unwrap();
    assert_eq!(dominant.source_name, "Facebook");
    assert_eq!(dominant.source_pageviews, 80);
    assert_eq!(row.share, Some(50.0));
}

#[test]
fn tie_goes_to_alphabetically_smallest_source() {
    let b = breakdown(&[&["Nota", "Twitter", "10"], &["Nota", "Direct", "10"]]);
    let t = totals(&[&["Nota", "20"]]);

    let row = &reconcile(&b, &t).unwrap().rows[0];
    assert_eq!(row.dominant.as_ref().unwrap().source_name, "Direct");
}

#[test]
fn zero_total_has_no_share() {
    let b = breakdown(&[&["Nota", "Google", "0"]]);
    let t = totals(&[&["Nota", "0"]]);

    let row = &reconcile(&b, &t).unwrap().rows[0];
    assert!(row.dominant.is_some());
    assert_eq!(row.share, None);
}

#[test]
fn article_without_breakdown_has_no_source() {
    let b = breakdown(&[&["Otra nota", "Google", "5"]]);
    let t = totals(&[&["Nota huérfana", "12"]]);

    let result = reconcile(&b, &t).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].title, "Nota huérfana");
    assert!(result.rows[0].dominant.is_none());
    assert!(result.rows[0].share.is_none());
}

#[test]
fn duplicate_totals_titles_stay_separate_rows() {
    let b = breakdown(&[&["Nota", "Google", "5"]]);
    let t = totals(&[&["Nota", "10"], &["Nota", "20"]]);

    let result = reconcile(&b, &t).unwrap();
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].share, Some(50.0));
    assert_eq!(result.rows[1].share, Some(25.0));
}

#[test]
fn share_rounds_to_two_decimals() {
    assert_eq!(share(1, 3), Some(33.33));
    assert_eq!(share(2, 3), Some(66.67));
    assert_eq!(share(150, 150), Some(100.0));
    assert_eq!(share(0, 10), Some(0.0));
    assert_eq!(share(5, 0), None);
}

#[test]
fn share_ties_round_half_to_even() {
    assert_eq!(share(1, 32), Some(3.12));
    assert_eq!(share(3, 32), Some(9.38));
}

// ============================================================
// Table identification
// ============================================================

#[test]
fn file_order_does_not_matter() {
    let b = breakdown(&[&["Nota", "Google", "5"]]);
    let t = totals(&[&["Nota", "10"]]);

    let forward = reconcile(&b, &t).unwrap();
    let backward = reconcile(&t, &b).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn both_tables_with_source_column_is_ambiguous() {
    let a = breakdown(&[&["Nota", "Google", "5"]]);
    let b = breakdown(&[&["Nota", "Google", "5"]]);
    assert_eq!(
        reconcile(&a, &b).unwrap_err(),
        ReconcileError::AmbiguousInput { both: true }
    );
}

#[test]
fn neither_table_with_source_column_is_ambiguous() {
    let a = totals(&[&["Nota", "5"]]);
    let b = totals(&[&["Nota", "5"]]);
    assert_eq!(
        reconcile(&a, &b).unwrap_err(),
        ReconcileError::AmbiguousInput { both: false }
    );
}

#[test]
fn missing_title_column_is_reported() {
    let b = breakdown(&[&["Nota", "Google", "5"]]);
    let t = Table::new(
        "totals.csv",
        &["headline", "pageviews_total"],
        rows(&[&["Nota", "5"]]),
    );

    let err = reconcile(&b, &t).unwrap_err();
    assert_eq!(
        err,
        ReconcileError::MissingColumn {
            table: "totals.csv".to_string(),
            column: "title".to_string(),
        }
    );
    assert!(err.to_string().contains("totals.csv"));
}

#[test]
fn raw_export_headers_are_accepted() {
    let b = Table::new(
        "a.csv",
        &[" Title ", "sourceInternal", "pageviewsTotal"],
        rows(&[&["Nota", "Google", "5"]]),
    );
    let t = Table::new(
        "b.csv",
        &["TITLE", "Pageviews Total"],
        rows(&[&["Nota", "10"]]),
    );

    let row = &reconcile(&b, &t).unwrap().rows[0];
    assert_eq!(row.dominant.as_ref().unwrap().source_name, "Google");
    assert_eq!(row.share, Some(50.0));
}

// ============================================================
// Malformed rows
// ============================================================

#[test]
fn malformed_pageviews_are_rejected_not_zeroed() {
    let b = breakdown(&[
        &["Nota", "Google", "abc"],
        &["Nota", "Facebook", "3"],
        &["Nota", "Direct", "-4"],
    ]);
    let t = totals(&[&["Nota", "1.200"], &["Otra", " 8 "]]);

    let result = reconcile(&b, &t).unwrap();

    // "1.200" is rejected, so only "Otra" reaches the report
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].title, "Otra");
    assert_eq!(result.rows[0].total_pageviews, 8);

    let rejected: Vec<(String, u64, String)> = result
        .rejected
        .iter()
        .map(|r| (r.table.clone(), r.line, r.value.clone()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            ("breakdown.csv".to_string(), 2, "abc".to_string()),
            ("breakdown.csv".to_string(), 4, "-4".to_string()),
            ("totals.csv".to_string(), 2, "1.200".to_string()),
        ]
    );
    assert_eq!(
        result.rejected[0].to_string(),
        "breakdown.csv line 2: invalid pageviews_total 'abc'"
    );
}

// ============================================================
// CSV files on disk
// ============================================================

#[test]
fn reconcile_from_csv_files() {
    let dir = tempfile::tempdir().unwrap();
    let breakdown_path = write_file(
        dir.path(),
        "por_fuente.csv",
        "\u{feff}title,sourceInternal,pageviews_total\n\
         \"Crisis, otra vez\",Google Discover,100\n\
         \"Crisis, otra vez\",Facebook,50\n\
         Lluvias en el norte,Direct,7\n",
    );
    let totals_path = write_file(
        dir.path(),
        "totales.csv",
        "title,pageviews_total\n\
         \"Crisis, otra vez\",150\n\
         Lluvias en el norte,x\n",
    );

    let totals_table = Table::from_path(&totals_path).unwrap();
    let breakdown_table = Table::from_path(&breakdown_path).unwrap();
    assert_eq!(breakdown_table.name, "por_fuente.csv");
    assert_eq!(breakdown_table.len(), 3);

    let result = reconcile(&totals_table, &breakdown_table).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].title, "Crisis, otra vez");
    assert_eq!(result.rows[0].share, Some(66.67));

    assert_eq!(result.rejected.len(), 1);
    assert_eq!(result.rejected[0].table, "totales.csv");
    assert_eq!(result.rejected[0].line, 3);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Table::from_path(&dir.path().join("no_existe.csv")).unwrap_err();
    assert!(err.to_string().contains("no_existe.csv"));
}
