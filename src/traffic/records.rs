// Typed records parsed out of the raw tables.
//
// Rows with a malformed pageview count are rejected and reported, never
// coerced to zero.

use serde::Serialize;

use super::table::{Table, TableRow};

/// Pageviews of one article from one traffic source (one export row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrafficRecord {
    pub article_title: String,
    pub source_name: String,
    pub pageviews: u64,
}

/// Total pageviews of one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsRecord {
    pub article_title: String,
    pub total_pageviews: u64,
}

/// A row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRejection {
    pub table: String,
    pub line: u64,
    pub column: String,
    pub value: String,
}

impl std::fmt::Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} line {}: invalid {} '{}'",
            self.table, self.line, self.column, self.value
        )
    }
}

/// Records that parsed, plus the rows that didn't.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub rejected: Vec<RowRejection>,
}

/// Column indices the parsers need, resolved once per table.
#[derive(Debug, Clone, Copy)]
pub struct BreakdownColumns {
    pub title: usize,
    pub source: usize,
    pub pageviews: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct TotalsColumns {
    pub title: usize,
    pub pageviews: usize,
}

pub fn parse_breakdown(table: &Table, columns: BreakdownColumns) -> Parsed<TrafficRecord> {
    let mut parsed = Parsed {
        records: Vec::with_capacity(table.len()),
        rejected: Vec::new(),
    };

    for row in table.rows() {
        let record = field(table, row, columns.title, "title").and_then(|title| {
            let source = field(table, row, columns.source, "source_internal")?;
            let pageviews = pageviews(table, row, columns.pageviews)?;
            Ok(TrafficRecord {
                article_title: title.to_string(),
                source_name: source.to_string(),
                pageviews,
            })
        });
        match record {
            Ok(r) => parsed.records.push(r),
            Err(rejection) => parsed.rejected.push(rejection),
        }
    }

    parsed
}

pub fn parse_totals(table: &Table, columns: TotalsColumns) -> Parsed<TotalsRecord> {
    let mut parsed = Parsed {
        records: Vec::with_capacity(table.len()),
        rejected: Vec::new(),
    };

    for row in table.rows() {
        let record = field(table, row, columns.title, "title").and_then(|title| {
            Ok(TotalsRecord {
                article_title: title.to_string(),
                total_pageviews: pageviews(table, row, columns.pageviews)?,
            })
        });
        match record {
            Ok(r) => parsed.records.push(r),
            Err(rejection) => parsed.rejected.push(rejection),
        }
    }

    parsed
}

fn field<'a>(
    table: &Table,
    row: &'a TableRow,
    index: usize,
    column: &str,
) -> Result<&'a str, RowRejection> {
    row.fields
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| reject(table, row, column, ""))
}

/// Parse a non-negative integer count. Surrounding whitespace is allowed;
/// anything else (blank, decimals, signs, thousands separators) is rejected.
fn pageviews(table: &Table, row: &TableRow, index: usize) -> Result<u64, RowRejection> {
    let raw = field(table, row, index, "pageviews_total")?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| reject(table, row, "pageviews_total", raw))
}

fn reject(table: &Table, row: &TableRow, column: &str, value: &str) -> RowRejection {
    RowRejection {
        table: table.name.clone(),
        line: row.line,
        column: column.to_string(),
        value: value.to_string(),
    }
}
