use anyhow::{Context, Result};
use tracing::debug;

use crate::table::{is_missing, Table};

/// A row survives only when every one of these columns carries a value.
pub static REQUIRED_COLUMNS: &[&str] = &["Release_Date", "Primary_Storage", "Primary_Camera"];

/// Removed from the output schema no matter what they contain.
pub static DROPPED_COLUMNS: &[&str] = &[
    "External_Storage",
    "Display_Resolution",
    "Front_Camera",
    "Display_Refresh_Rate",
];

/// Drop every row with a missing value in any required column. Returns the
/// number of rows removed. A required column absent from the header is fatal.
pub fn drop_incomplete_rows(table: &mut Table) -> Result<usize> {
    let required: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .map(|name| {
            table
                .column_index(name)
                .with_context(|| format!("required column `{}` not in header", name))
        })
        .collect::<Result<_>>()?;

    let before = table.rows.len();
    table
        .rows
        .retain(|row| required.iter().all(|&idx| !is_missing(&row[idx])));

    let dropped = before - table.rows.len();
    debug!(dropped, remaining = table.rows.len(), "dropped incomplete rows");
    Ok(dropped)
}

/// Remove the fixed column set from the header and from every row. Columns
/// already absent are skipped, so the output schema never contains any of
/// them whatever the input looked like. Returns the number removed.
pub fn drop_columns(table: &mut Table) -> usize {
    let mut doomed: Vec<usize> = DROPPED_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    doomed.sort_unstable();

    // Back to front so the earlier indices stay valid while we remove.
    for &idx in doomed.iter().rev() {
        table.headers.remove(idx);
        for row in &mut table.rows {
            row.remove(idx);
        }
    }

    debug!(dropped = doomed.len(), remaining = table.headers.len(), "dropped columns");
    doomed.len()
}
