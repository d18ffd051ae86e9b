// src/process/mod.rs

pub mod date_parser;
pub mod filter;

use anyhow::{Context, Result};
use tracing::info;

use crate::table::Table;

/// Column rewritten in place by the year-extraction stage.
const RELEASE_DATE: &str = "Release_Date";

/// Per-stage counts from one cleaning pass, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanSummary {
    pub years_parsed: usize,
    pub years_missing: usize,
    pub rows_dropped: usize,
    pub columns_dropped: usize,
}

/// Run the whole cleaning pass over `table` in place:
/// rewrite `Release_Date` as a four-digit year, drop rows missing any
/// required field, then drop the fixed column set.
pub fn clean_table(table: &mut Table) -> Result<CleanSummary> {
    let mut summary = CleanSummary::default();

    // 1) Release_Date → year, blank when no layout matches
    let date_idx = table
        .column_index(RELEASE_DATE)
        .with_context(|| format!("column `{}` not in header", RELEASE_DATE))?;
    for row in &mut table.rows {
        match date_parser::extract_year(&row[date_idx]) {
            Some(year) => {
                row[date_idx] = year.to_string();
                summary.years_parsed += 1;
            }
            None => {
                row[date_idx] = String::new();
                summary.years_missing += 1;
            }
        }
    }
    info!(
        parsed = summary.years_parsed,
        missing = summary.years_missing,
        "extracted release years"
    );

    // 2) rows missing a required field
    summary.rows_dropped = filter::drop_incomplete_rows(table)?;

    // 3) the fixed column set
    summary.columns_dropped = filter::drop_columns(table);

    Ok(summary)
}
